use anyhow::Result;
use vidup::cli::{actions, start};

#[tokio::main]
async fn main() -> Result<()> {
    let (api, action, globals) = start()?;

    actions::handle(api, action, &globals).await
}

use crate::{
    api::responses::{MultipartPresign, PartReceipt},
    upload::{UploadError, iterator::PartIterator},
};

/// One presigned part together with the byte range it covers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Part {
    number: u32,
    url: String,
    seek: u64,
    chunk: u64,
}

impl Part {
    #[must_use]
    pub const fn new(number: u32, url: String, seek: u64, chunk: u64) -> Self {
        Self {
            number,
            url,
            seek,
            chunk,
        }
    }

    /// Match the presigned parts against the ranges the file splits into.
    ///
    /// An empty part list is accepted as is, whatever the file size. Otherwise
    /// parts must be numbered `1..=N` in order with no gaps, and `N` must be
    /// exactly the number of `part_size_bytes` ranges needed to cover the file.
    ///
    /// # Errors
    /// Will return `PresignFailed` if the presign does not describe the file
    pub fn plan(presign: &MultipartPresign, file_size: u64) -> Result<Vec<Self>, UploadError> {
        if presign.parts.is_empty() {
            return Ok(Vec::new());
        }

        if presign.part_size_bytes == 0 {
            return Err(UploadError::PresignFailed(
                "partSizeBytes must be greater than zero".to_string(),
            ));
        }

        let mut ranges = PartIterator::new(file_size, presign.part_size_bytes);
        let mut parts = Vec::with_capacity(presign.parts.len());

        for presigned in &presign.parts {
            match ranges.next() {
                Some((number, seek, chunk)) if number == presigned.part_number => {
                    parts.push(Self::new(number, presigned.url.clone(), seek, chunk));
                }

                Some((number, _, _)) => {
                    return Err(UploadError::PresignFailed(format!(
                        "expected part {number}, got part {}",
                        presigned.part_number
                    )));
                }

                None => {
                    return Err(UploadError::PresignFailed(format!(
                        "part {} starts beyond the end of the file ({file_size} bytes)",
                        presigned.part_number
                    )));
                }
            }
        }

        if let Some((number, _, _)) = ranges.next() {
            return Err(UploadError::PresignFailed(format!(
                "missing part {number} of {}",
                file_size.div_ceil(presign.part_size_bytes)
            )));
        }

        Ok(parts)
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn seek(&self) -> u64 {
        self.seek
    }

    #[must_use]
    pub const fn chunk(&self) -> u64 {
        self.chunk
    }

    /// End of the byte range, exclusive.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.seek + self.chunk
    }

    #[must_use]
    pub fn into_receipt(self, e_tag: String) -> PartReceipt {
        PartReceipt {
            part_number: self.number,
            e_tag,
        }
    }
}

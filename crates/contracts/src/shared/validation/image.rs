/// Mime type and size of a file picked in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// Upload constraints for image fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRule {
    pub allowed_mime: &'static [&'static str],
    pub max_bytes: u64,
}

pub const DESIGN_IMAGE: ImageRule = ImageRule {
    allowed_mime: &[
        "image/jpeg",
        "image/png",
        "image/jpg",
        "image/gif",
        "image/webp",
    ],
    max_bytes: 3 * 1024 * 1024,
};

impl ImageRule {
    /// No file selected is valid; the field is optional.
    pub fn validate(&self, file: Option<&ImageMeta>) -> Result<(), String> {
        let Some(file) = file else {
            return Ok(());
        };
        if !self.allowed_mime.contains(&file.mime.as_str()) {
            return Err("Only image files are allowed".to_string());
        }
        if file.size > self.max_bytes {
            return Err("File size must be less than 3 MB".to_string());
        }
        Ok(())
    }

    /// Value for the `accept` attribute of the file input.
    pub fn accept_attr(&self) -> String {
        self.allowed_mime.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mime: &str, size: u64) -> ImageMeta {
        ImageMeta {
            name: "door.png".into(),
            mime: mime.into(),
            size,
        }
    }

    #[test]
    fn test_no_file_is_valid() {
        assert!(DESIGN_IMAGE.validate(None).is_ok());
    }

    #[test]
    fn test_mime_checked_before_size() {
        assert_eq!(
            DESIGN_IMAGE.validate(Some(&file("application/pdf", 10 * 1024 * 1024))),
            Err("Only image files are allowed".to_string())
        );
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(DESIGN_IMAGE.validate(Some(&file("image/webp", 3 * 1024 * 1024))).is_ok());
        assert_eq!(
            DESIGN_IMAGE.validate(Some(&file("image/png", 3 * 1024 * 1024 + 1))),
            Err("File size must be less than 3 MB".to_string())
        );
    }
}

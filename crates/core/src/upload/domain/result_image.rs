use image::ImageFormat;

/// Image bytes returned by the service for one successful submission.
///
/// The body is kept exactly as received. Decoding only happens on demand,
/// for diagnostics; renderers display the bytes at a fixed size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultImage {
    bytes: Vec<u8>,
    content_type: Option<String>,
}

impl ResultImage {
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            bytes,
            content_type,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decoded `(width, height)`, or `None` if the body is not a readable image.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let img = image::load_from_memory(&self.bytes).ok()?;
        Some((img.width(), img.height()))
    }

    /// File extension matching the response content type, falling back to
    /// sniffing the bytes and finally to `bin`.
    pub fn extension(&self) -> &'static str {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .and_then(|ct| ImageFormat::from_mime_type(ct.trim().to_lowercase()))
            .or_else(|| image::guess_format(&self.bytes).ok())
            .and_then(|format| format.extensions_str().first().copied())
            .unwrap_or("bin")
    }
}

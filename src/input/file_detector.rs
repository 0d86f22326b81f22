//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Csv,
    Json,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "csv" => FileType::Csv,
            "json" => FileType::Json,
            _ => FileType::Unknown,
        }
    }
}

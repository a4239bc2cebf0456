use std::path::Path;

/// Class names indexed by the position of their score in the model output.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// One label per line; blank lines are skipped.
    pub fn parse(text: &str) -> Self {
        let labels = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { labels }
    }

    pub fn from_path(
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let table = LabelTable::parse("tench\n  goldfish \n\n great white shark\r\n");

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0), Some("tench"));
        assert_eq!(table.get(1), Some("goldfish"));
        assert_eq!(table.get(2), Some("great white shark"));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn test_parse_empty_text() {
        let table = LabelTable::parse("");
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!(
            "mobilenet-classifier-labels-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "cat\ndog\n").unwrap();

        let table = LabelTable::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(table, ["cat", "dog"].into_iter().collect::<LabelTable>());
    }

    #[test]
    fn test_from_missing_path() {
        assert!(LabelTable::from_path("./does/not/exist.txt").is_err());
    }
}

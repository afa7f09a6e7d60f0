//! Source compliance levels.

use std::fmt;

/// A Java source level encoded as `major << 16 | minor` of the class file
/// version that first shipped it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct SourceLevel(pub u64);

impl SourceLevel {
    pub const JDK1_1: SourceLevel = SourceLevel::new(45, 3);
    pub const JDK1_2: SourceLevel = SourceLevel::new(46, 0);
    pub const JDK1_3: SourceLevel = SourceLevel::new(47, 0);
    pub const JDK1_4: SourceLevel = SourceLevel::new(48, 0);
    pub const JDK1_5: SourceLevel = SourceLevel::new(49, 0);
    pub const JDK1_6: SourceLevel = SourceLevel::new(50, 0);
    pub const JDK1_7: SourceLevel = SourceLevel::new(51, 0);
    pub const JDK1_8: SourceLevel = SourceLevel::new(52, 0);

    const NAMED: [(&'static str, SourceLevel); 8] = [
        ("1.1", Self::JDK1_1),
        ("1.2", Self::JDK1_2),
        ("1.3", Self::JDK1_3),
        ("1.4", Self::JDK1_4),
        ("1.5", Self::JDK1_5),
        ("1.6", Self::JDK1_6),
        ("1.7", Self::JDK1_7),
        ("1.8", Self::JDK1_8),
    ];

    pub const fn new(major: u16, minor: u16) -> Self {
        SourceLevel(((major as u64) << 16) | minor as u64)
    }

    pub const fn major(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Parse `"1.5"`, `"5"` or `"5.0"` style level names.
    pub fn parse(text: &str) -> Option<SourceLevel> {
        let text = text.trim();
        let normalized = match text {
            "5" | "5.0" => "1.5",
            "6" | "6.0" => "1.6",
            "7" | "7.0" => "1.7",
            "8" | "8.0" => "1.8",
            other => other,
        };
        Self::NAMED
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, level)| *level)
    }
}

impl Default for SourceLevel {
    fn default() -> Self {
        SourceLevel::JDK1_5
    }
}

impl fmt::Display for SourceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::NAMED.iter().find(|(_, level)| level == self) {
            Some((name, _)) => f.write_str(name),
            None => write!(f, "{}.{}", self.major(), self.0 & 0xFFFF),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SourceLevel;

    #[test]
    fn levels_are_ordered() {
        assert!(SourceLevel::JDK1_3 < SourceLevel::JDK1_4);
        assert!(SourceLevel::JDK1_4 < SourceLevel::JDK1_5);
        assert_eq!(SourceLevel::JDK1_5.0, 49 << 16);
    }

    #[test]
    fn parses_level_names() {
        assert_eq!(SourceLevel::parse("1.4"), Some(SourceLevel::JDK1_4));
        assert_eq!(SourceLevel::parse("5"), Some(SourceLevel::JDK1_5));
        assert_eq!(SourceLevel::parse("1.9"), None);
        assert_eq!(SourceLevel::JDK1_6.to_string(), "1.6");
    }
}

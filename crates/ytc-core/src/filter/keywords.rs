//! Keyword sets and case-insensitive matching

/// Promotional and solicitation terms
pub const DEFAULT_SPAM_KEYWORDS: &[&str] = &[
    "翻墙", "翻牆", "VPN", "软件", "軟體", "免费", "免費",
    "推广", "推廣", "福利", "赚钱", "賺錢", "加微", "v信",
    "V信", "Q群", "扣群", "奈飞", "奈飛", "chatgpt", "gpt-4",
    "好人一生平安",
];

/// Policy-restricted terms
pub const DEFAULT_SENSITIVE_KEYWORDS: &[&str] = &[
    // Historical events
    "六四", "天安门事件", "天安門事件", "8964",
    // Banned groups
    "法轮功", "法輪功", "大法好",
    // Separatism
    "台独", "台獨", "臺独", "臺獨",
    "台湾独立", "台灣獨立", "臺灣獨立",
    "藏独", "藏獨", "疆独", "疆獨", "港独", "港獨",
    "台湾国", "台灣國", "臺灣國",
    "台湾民主共和国", "臺灣民主共和國", "台灣民主共和國",
    "台湾共和国", "台灣共和國", "臺灣共和國",
    "中华民国台湾", "中華民國台灣", "中華民國臺灣",
    "中华民国", "中華民國", "中国民国", "中國民國",
    "台湾民国", "臺灣民國",
    "中华人民共和国", "中華人民共和國", "中国人民共和国", "中國人民共和國",
    "中华人民共合国", "中華人民共合國", "中国人民共合国", "中國人民共合國",
    // Protest slogans
    "光复香港", "光復香港", "时代革命", "時代革命",
    // Slurs against the state or party
    "共匪", "赤匪", "支那", "中国共产党黑暗", "中國共產黨黑暗", "中国共产党灭亡", "中國共產黨滅亡",
    // Media
    "民报", "民報",
    // Nicknames for leaders
    "维尼", "維尼", "包子", "习大大", "習大大", "习近平", "習近平",
];

/// An ordered, duplicate-free set of literal keywords
///
/// Empty terms are discarded on construction: an empty needle would match
/// every string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    terms: Vec<String>,
    lowered: Vec<String>,
}

impl KeywordSet {
    /// Build a set from any list of terms, keeping first-seen order
    pub fn new(terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut set = Self::default();
        for term in terms {
            let term = term.into();
            if term.is_empty() || set.terms.contains(&term) {
                continue;
            }
            set.lowered.push(term.to_lowercase());
            set.terms.push(term);
        }
        set
    }

    /// The built-in spam list
    pub fn default_spam() -> Self {
        Self::new(DEFAULT_SPAM_KEYWORDS.iter().copied())
    }

    /// The built-in sensitive list
    pub fn default_sensitive() -> Self {
        Self::new(DEFAULT_SENSITIVE_KEYWORDS.iter().copied())
    }

    /// Terms in insertion order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// First keyword (as configured) occurring in `text`, ignoring case
    pub fn find_in(&self, text: &str) -> Option<&str> {
        if text.is_empty() {
            return None;
        }
        let haystack = text.to_lowercase();
        self.lowered
            .iter()
            .position(|needle| haystack.contains(needle.as_str()))
            .map(|i| self.terms[i].as_str())
    }

    /// Whether any keyword occurs in `text`, ignoring case
    pub fn matches(&self, text: &str) -> bool {
        self.find_in(text).is_some()
    }
}

/// Case-insensitive literal containment test; absent or empty text never matches
pub fn contains_keyword(text: Option<&str>, keywords: &KeywordSet) -> bool {
    text.is_some_and(|t| keywords.matches(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let set = KeywordSet::new(["VPN", "chatgpt"]);
        assert!(set.matches("best vpn deals"));
        assert!(set.matches("Ask ChatGPT"));
        assert!(!set.matches("nothing here"));
    }

    #[test]
    fn test_empty_and_absent_text() {
        let set = KeywordSet::default_spam();
        assert!(!contains_keyword(None, &set));
        assert!(!contains_keyword(Some(""), &set));
    }

    #[test]
    fn test_keywords_are_literal() {
        let set = KeywordSet::new(["gpt-4", "a.b"]);
        assert!(set.matches("using GPT-4 today"));
        assert!(!set.matches("axb"));
        assert!(set.matches("see a.b"));
    }

    #[test]
    fn test_find_returns_configured_term() {
        let set = KeywordSet::new(["V信", "Q群"]);
        assert_eq!(set.find_in("加我v信"), Some("V信"));
        assert_eq!(set.find_in("hello"), None);
    }

    #[test]
    fn test_construction_drops_empty_and_duplicates() {
        let set = KeywordSet::new(["a", "", "b", "a"]);
        assert_eq!(set.terms(), &["a".to_string(), "b".to_string()]);
        assert_eq!(set.len(), 2);
        assert!(!set.matches("xyz"));
    }

    #[test]
    fn test_default_lists_are_disjoint() {
        let spam = KeywordSet::default_spam();
        let sensitive = KeywordSet::default_sensitive();
        assert!(!spam.is_empty());
        assert!(!sensitive.is_empty());
        assert!(spam.terms().iter().all(|t| !sensitive.terms().contains(t)));
    }
}

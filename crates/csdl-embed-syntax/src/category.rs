//! Token categories and the fixed CSDL vocabularies used to assign them.

use std::fmt;

/// Operator tokens, compared case-insensitively against a whole word.
pub const OPERATORS: &[&str] = &[
    "<",
    "<=",
    "==",
    "<>",
    ">",
    ">=",
    "cs",
    "contains_word",
    "contains_phrase",
    "or",
    "contains",
    "and",
    "not",
    "in",
    "geo_box",
    "regex_exact",
    "exists",
    "float",
    "contains_any",
    "any",
    "wildcard",
    "url_in",
];

/// Keyword tokens, compared case-insensitively against a whole word.
pub const KEYWORDS: &[&str] = &["tag", "tags", "stream", "filter", "return"];

/// The closed set of categories a finalized word can be given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Predicate,
    Operator,
    Keyword,
    String,
    Int,
    Comment,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Predicate,
        Category::Operator,
        Category::Keyword,
        Category::String,
        Category::Int,
        Category::Comment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Predicate => "predicate",
            Category::Operator => "operator",
            Category::Keyword => "keyword",
            Category::String => "string",
            Category::Int => "int",
            Category::Comment => "comment",
        }
    }

    /// CSS class carried by the span wrapping a word of this category.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Predicate => "category-predicate",
            Category::Operator => "category-operator",
            Category::Keyword => "category-keyword",
            Category::String => "category-string",
            Category::Int => "category-int",
            Category::Comment => "category-comment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Category::Predicate, "category-predicate")]
    #[case(Category::Operator, "category-operator")]
    #[case(Category::Keyword, "category-keyword")]
    #[case(Category::String, "category-string")]
    #[case(Category::Int, "category-int")]
    #[case(Category::Comment, "category-comment")]
    fn css_class_is_prefixed_name(#[case] category: Category, #[case] class: &str) {
        assert_eq!(category.css_class(), class);
        assert_eq!(format!("category-{category}"), class);
    }

    #[test]
    fn vocabularies_are_lowercase() {
        for word in OPERATORS.iter().chain(KEYWORDS) {
            assert_eq!(word.to_lowercase(), *word);
        }
    }
}

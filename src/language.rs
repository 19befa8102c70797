// src/language.rs
use crate::errors::PracticeError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A language the user can write their sorting code in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
    Python,
    Javascript,
    Csharp,
    Cpp,
    Go,
}

const JAVA_TEMPLATE: &str = r#"public class Solution {
    public int[] sortArray(int[] arr) {
        // Your sorting algorithm here
        // Return the sorted array
        return arr;
    }
}"#;

const PYTHON_TEMPLATE: &str = r#"def sort_array(arr):
    # Your sorting algorithm here
    # Return the sorted list
    return arr"#;

const JAVASCRIPT_TEMPLATE: &str = r#"function sortArray(arr) {
    // Your sorting algorithm here
    // Return the sorted array
    return arr;
}"#;

const CSHARP_TEMPLATE: &str = r#"using System;

public class Solution {
    public int[] SortArray(int[] arr) {
        // Your sorting algorithm here
        // Return the sorted array
        return arr;
    }
}"#;

const CPP_TEMPLATE: &str = r#"#include <vector>
using namespace std;

vector<int> sortArray(vector<int> arr) {
    // Your sorting algorithm here
    // Return the sorted vector
    return arr;
}"#;

const GO_TEMPLATE: &str = r#"package main

func sortArray(arr []int) []int {
    // Your sorting algorithm here
    // Return the sorted slice
    return arr
}"#;

impl Language {
    /// Every selectable language, in the order the page lists them.
    pub fn all() -> [Language; 6] {
        [
            Language::Java,
            Language::Python,
            Language::Javascript,
            Language::Csharp,
            Language::Cpp,
            Language::Go,
        ]
    }

    /// Wire name sent to the execution service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Csharp => "csharp",
            Language::Cpp => "cpp",
            Language::Go => "go",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Python => "Python",
            Language::Javascript => "JavaScript",
            Language::Csharp => "C#",
            Language::Cpp => "C++",
            Language::Go => "Go",
        }
    }

    /// Starter code shown in the editor when a problem starts.
    pub fn template(&self) -> &'static str {
        match self {
            Language::Java => JAVA_TEMPLATE,
            Language::Python => PYTHON_TEMPLATE,
            Language::Javascript => JAVASCRIPT_TEMPLATE,
            Language::Csharp => CSHARP_TEMPLATE,
            Language::Cpp => CPP_TEMPLATE,
            Language::Go => GO_TEMPLATE,
        }
    }

    /// Syntax-highlighting id for the editor widget. `None` means plain text.
    pub fn editor_language(&self) -> Option<&'static str> {
        match self {
            Language::Java => Some("java"),
            Language::Python => Some("python"),
            Language::Javascript => Some("javascript"),
            Language::Csharp => Some("csharp"),
            Language::Cpp | Language::Go => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = PracticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Language::all()
            .into_iter()
            .find(|lang| lang.as_str() == wanted)
            .ok_or_else(|| PracticeError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_names() {
        assert_eq!("java".parse::<Language>().unwrap(), Language::Java);
        assert_eq!(" Python ".parse::<Language>().unwrap(), Language::Python);
        assert_eq!("CPP".parse::<Language>().unwrap(), Language::Cpp);
        assert!(matches!(
            "rust".parse::<Language>(),
            Err(PracticeError::UnknownLanguage(name)) if name == "rust"
        ));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Language::Csharp).unwrap();
        assert_eq!(json, "\"csharp\"");
        let lang: Language = serde_json::from_str("\"javascript\"").unwrap();
        assert_eq!(lang, Language::Javascript);
    }

    #[test]
    fn test_editor_language_falls_back_for_cpp_and_go() {
        assert_eq!(Language::Csharp.editor_language(), Some("csharp"));
        assert_eq!(Language::Cpp.editor_language(), None);
        assert_eq!(Language::Go.editor_language(), None);
    }

    #[test]
    fn test_templates_return_their_input() {
        for lang in Language::all() {
            let template = lang.template();
            assert!(template.contains("return arr"), "{} template", lang);
        }
        assert!(Language::Python.template().starts_with("def sort_array"));
    }
}

//! Example questions grouped by FAQ category.
//!
//! The presentation layer shows these as shortcuts; selecting one only
//! pre-fills the pending query.

// ---------------------------------------------------------------------------
// Static default catalog
// ---------------------------------------------------------------------------

static UNIVERSITY_EXAMPLES: &[(&str, &[&str])] = &[
    (
        "Admissions",
        &[
            "What is the admission process for undergraduate programs?",
            "What documents are required for admission?",
            "When do admissions usually open?",
        ],
    ),
    (
        "Fees",
        &[
            "What are the semester fee details?",
            "Are there any scholarships available?",
            "How can I pay my fees?",
        ],
    ),
    (
        "Hostel",
        &[
            "How can I apply for a hostel?",
            "What facilities are provided in hostels?",
            "What are the hostel rules?",
        ],
    ),
    (
        "Academics",
        &[
            "What is the grading policy?",
            "What is the attendance requirement?",
            "How can I register for courses?",
        ],
    ),
    (
        "Library",
        &[
            "What are the library timings?",
            "How many books can a student borrow?",
            "Are there digital resources available?",
        ],
    ),
];

// ---------------------------------------------------------------------------
// ExampleCatalog
// ---------------------------------------------------------------------------

/// Ordered mapping of category name → example questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleCatalog {
    categories: Vec<(String, Vec<String>)>,
}

impl ExampleCatalog {
    pub fn new(categories: Vec<(String, Vec<String>)>) -> Self {
        Self { categories }
    }

    /// The built-in university help-desk examples.
    pub fn university() -> Self {
        Self::new(
            UNIVERSITY_EXAMPLES
                .iter()
                .map(|(name, questions)| {
                    (
                        name.to_string(),
                        questions.iter().map(|q| q.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    /// Category names in display order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    /// Questions for `category`, or `None` when the category is unknown.
    pub fn questions(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, questions)| questions.as_slice())
    }

    /// A single example question.
    pub fn example(&self, category: &str, index: usize) -> Option<&str> {
        self.questions(category)?.get(index).map(String::as_str)
    }
}

impl Default for ExampleCatalog {
    fn default() -> Self {
        Self::university()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn university_catalog_has_five_categories_of_three() {
        let catalog = ExampleCatalog::university();
        let names: Vec<&str> = catalog.categories().collect();
        assert_eq!(names, ["Admissions", "Fees", "Hostel", "Academics", "Library"]);
        for name in names {
            assert_eq!(catalog.questions(name).map(|q| q.len()), Some(3));
        }
    }

    #[test]
    fn example_lookup() {
        let catalog = ExampleCatalog::default();
        assert_eq!(
            catalog.example("Hostel", 2),
            Some("What are the hostel rules?")
        );
        assert_eq!(catalog.example("Hostel", 3), None);
        assert_eq!(catalog.example("Parking", 0), None);
    }

    #[test]
    fn custom_catalog() {
        let catalog = ExampleCatalog::new(vec![("Sports".into(), vec!["Is there a gym?".into()])]);
        assert_eq!(catalog.example("Sports", 0), Some("Is there a gym?"));
        assert!(catalog.questions("Fees").is_none());
    }
}

/// The last category the user drilled into.
///
/// Written only when a Section view is entered. Transitions carry their own
/// context, so this is informational and never used to rebuild a breadcrumb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    category_name: Option<String>,
}

impl NavigationContext {
    pub fn enter_section(&mut self, category_name: Option<String>) {
        self.category_name = category_name;
    }

    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_section_overwrites() {
        let mut nav = NavigationContext::default();
        assert_eq!(nav.category_name(), None);
        nav.enter_section(Some("Billing".to_owned()));
        assert_eq!(nav.category_name(), Some("Billing"));
        nav.enter_section(None);
        assert_eq!(nav.category_name(), None);
    }
}

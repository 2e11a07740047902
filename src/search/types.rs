/// Query-string parameters of a review query. All are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReviewQuery {
    /// Builds the query from decoded key/value pairs.
    ///
    /// The first non-empty value of a repeated key wins; unknown keys and
    /// blank values are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "location" => &mut query.location,
                "start_date" => &mut query.start_date,
                "end_date" => &mut query.end_date,
                _ => continue,
            };
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub fn start_date(&self) -> Option<&str> {
        non_empty(&self.start_date)
    }

    pub fn end_date(&self) -> Option<&str> {
        non_empty(&self.end_date)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

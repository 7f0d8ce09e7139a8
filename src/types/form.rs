//! Form parameters for `application/x-www-form-urlencoded` bodies.

use url::form_urlencoded;

/// An ordered set of form fields with unique keys.
///
/// Fields keep insertion order for inspection; [`FormParams::encode`] sorts
/// them by key, the ordering the query API wire encoder uses.
///
/// ```
/// use integrations_aws_ses_query::types::FormParams;
///
/// let mut params = FormParams::new();
/// params.insert("Source", "a@x.com");
/// params.insert("Action", "SendEmail");
///
/// assert_eq!(params.encode(), "Action=SendEmail&Source=a%40x.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    fields: Vec<(String, String)>,
}

impl FormParams {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Value of a field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a field is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize as a form body with keys sorted byte-wise.
    pub fn encode(&self) -> String {
        let mut sorted: Vec<&(String, String)> = self.fields.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in sorted {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = FormParams::new();
        params.insert("b", "1");
        params.insert("a", "2");
        params.insert("b", "3");

        assert_eq!(params.len(), 2);
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("b", "3"), ("a", "2")]);
    }

    #[test]
    fn test_encode_sorts_bytewise() {
        let mut params = FormParams::new();
        params.insert("Destination.ToAddresses.member.10", "j");
        params.insert("Destination.ToAddresses.member.2", "b");
        params.insert("Action", "SendEmail");
        params.insert("AWSAccessKeyId", "AKID");

        assert_eq!(
            params.encode(),
            "AWSAccessKeyId=AKID&Action=SendEmail&\
             Destination.ToAddresses.member.10=j&Destination.ToAddresses.member.2=b"
        );
    }

    #[test]
    fn test_encode_escapes_values() {
        let mut params = FormParams::new();
        params.insert("Message.Subject.Data", "Hello world & more=1");
        params.insert("Source", "a+b@x.com");

        assert_eq!(
            params.encode(),
            "Message.Subject.Data=Hello+world+%26+more%3D1&Source=a%2Bb%40x.com"
        );
    }

    #[test]
    fn test_empty() {
        let params = FormParams::new();
        assert!(params.is_empty());
        assert_eq!(params.encode(), "");
        assert!(!params.contains_key("Action"));
    }
}

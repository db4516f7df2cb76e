use pkg_constants::htpasswd::LINE_SEPARATOR;

/// Where a Secret lands: namespace, object name, and the key inside `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretIdentity {
    pub namespace: String,
    pub name: String,
    pub data_key: String,
}

/// Newline-joined htpasswd lines stored under the Secret's data key.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecretPayload {
    data: Vec<u8>,
}

impl SecretPayload {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Join lines with `\n`. No trailing separator is added.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let joined = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<&str>>()
            .join(LINE_SEPARATOR);
        Self::new(joined.into_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Split the payload back into its lines. Lossy for non-UTF-8 data.
    pub fn lines(&self) -> Vec<String> {
        if self.data.is_empty() {
            return Vec::new();
        }
        String::from_utf8_lossy(&self.data)
            .split(LINE_SEPARATOR)
            .map(str::to_string)
            .collect()
    }
}

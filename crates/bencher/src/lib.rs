//! Shared fixtures for the `Link` header benchmarks.

/// A named header value together with the number of links it should parse into.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    file: TestFile,
    link_count: usize,
}

impl TestCase {
    pub const fn new(name: &'static str, file: TestFile, link_count: usize) -> Self {
        Self { name, file, link_count }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    pub fn file_name(&self) -> &'static str {
        self.file().file_name
    }

    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// The header value, without surrounding whitespace left by the fixture file.
    pub fn header_value(&self) -> &'static str {
        self.file().content().trim()
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}

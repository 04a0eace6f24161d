#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JobKind {
    Read,
    Write,
}

impl JobKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::Read => "read",
            JobKind::Write => "write",
        }
    }
}

use serde::Serialize;

/// Access roles for the HTTP surface.
/// The operator records entries; the supervisor gets read-only access
/// with the matricule column redacted, plus export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Operator,
    Supervisor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Operator => "operator",
            Role::Supervisor => "supervisor",
        }
    }

    pub fn can_append(&self) -> bool {
        matches!(self, Role::Operator)
    }

    pub fn can_export(&self) -> bool {
        matches!(self, Role::Supervisor)
    }

    /// Supervisors never see the operator credential column.
    pub fn sees_matricule(&self) -> bool {
        matches!(self, Role::Operator)
    }
}

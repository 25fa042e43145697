//! Protocol-level metadata: name, kind, declared roles and imports.

use crate::error::StructuralError;
use crate::role::Role;

/// Whether a tree describes the whole protocol or one endpoint's projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolKind {
    Global,
    Local,
    ParametrisedLocal,
}

impl ProtocolKind {
    fn as_str(self) -> &'static str {
        match self {
            ProtocolKind::Global => "global",
            ProtocolKind::Local => "local",
            ProtocolKind::ParametrisedLocal => "parametrised-local",
        }
    }
}

/// An imported protocol reference, e.g. `import Ping.Pong as PP from "ping";`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    pub name: String,
    pub alias: Option<String>,
    pub from: String,
}

impl Import {
    pub fn new(name: impl Into<String>, from: impl Into<String>) -> Import {
        Import { name: name.into(), alias: None, from: from.into() }
    }

    pub fn with_alias(name: impl Into<String>, alias: impl Into<String>, from: impl Into<String>) -> Import {
        Import { name: name.into(), alias: Some(alias.into()), from: from.into() }
    }
}

/// Metadata attached to every [`crate::protocol::Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolInfo {
    pub name: String,
    pub kind: ProtocolKind,
    /// Required iff `kind != Global`.
    pub myrole: Option<String>,
    pub roles: Vec<Role>,
    pub imports: Vec<Import>,
}

impl ProtocolInfo {
    pub fn new(name: impl Into<String>, kind: ProtocolKind) -> ProtocolInfo {
        ProtocolInfo { name: name.into(), kind, myrole: None, roles: Vec::new(), imports: Vec::new() }
    }

    pub fn set_myrole(&mut self, role: impl Into<String>) -> &mut Self {
        self.myrole = Some(role.into());
        self
    }

    pub fn add_role(&mut self, role: Role) -> &mut Self {
        self.roles.push(role);
        self
    }

    pub fn add_import(&mut self, import: Import) -> &mut Self {
        self.imports.push(import);
        self
    }

    /// Checks the invariants this metadata alone can witness: no duplicate
    /// role names, and `myrole` present whenever `kind != Global`.
    pub(crate) fn validate(&self) -> Result<(), StructuralError> {
        let mut seen = std::collections::HashSet::new();
        for role in &self.roles {
            if !seen.insert(&role.name) {
                return Err(StructuralError::DuplicateRole { name: role.name.clone() });
            }
        }
        if self.kind != ProtocolKind::Global && self.myrole.is_none() {
            return Err(StructuralError::MissingMyrole {
                name: self.name.clone(),
                kind: self.kind.as_str(),
            });
        }
        Ok(())
    }

    pub(crate) fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }
}

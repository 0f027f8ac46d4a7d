use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Page sizes the UI is allowed to request.
pub const PAGE_SIZES: [usize; 5] = [5, 10, 25, 50, 100];

/// The four user-editable fields of an employee record, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Role,
    Department,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "Name"),
            Field::Email => write!(f, "Email"),
            Field::Role => write!(f, "Role"),
            Field::Department => write!(f, "Department"),
        }
    }
}

/// Editable employee fields, without an identity. This is the validation
/// boundary: a `Fields` value is checked before it ever becomes (or replaces)
/// an [`Employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

impl EmployeeFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            department: department.into(),
        }
    }

    /// Check fields in order name, email, role, department and report the
    /// first one that fails. All four must be non-empty after trimming and
    /// the email must look like `local@domain.tld`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RosterError::InvalidField(Field::Name));
        }
        if self.email.trim().is_empty() || !is_valid_email(self.email.trim()) {
            return Err(RosterError::InvalidField(Field::Email));
        }
        if self.role.trim().is_empty() {
            return Err(RosterError::InvalidField(Field::Role));
        }
        if self.department.trim().is_empty() {
            return Err(RosterError::InvalidField(Field::Department));
        }
        Ok(())
    }

    /// Returns a copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }
}

// Accepts something@something.something with no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// One employee record. The id is opaque, unique for the lifetime of the
/// collection, and never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

impl Employee {
    /// Build a record from already-validated fields, assigning a fresh id.
    pub fn new(fields: EmployeeFields) -> Self {
        let fields = fields.trimmed();
        Self {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            email: fields.email,
            role: fields.role,
            department: fields.department,
        }
    }

    /// Replace all four fields wholesale, keeping the id.
    pub fn set_fields(&mut self, fields: EmployeeFields) {
        let fields = fields.trimmed();
        self.name = fields.name;
        self.email = fields.email;
        self.role = fields.role;
        self.department = fields.department;
    }

    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields::new(&self.name, &self.email, &self.role, &self.department)
    }
}

/// Which column a sort applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
    Role,
    Department,
}

impl SortKey {
    pub fn value_of<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            SortKey::Name => &employee.name,
            SortKey::Email => &employee.email,
            SortKey::Role => &employee.role,
            SortKey::Department => &employee.department,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Sort specification. Transient UI state; never persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }
}

/// Which slice of the filtered/sorted collection to materialize.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, per_page: 10 }
    }
}

//! The canonical employee collection.
//!
//! [`RecordStore`] exclusively owns the in-memory collection and is the only
//! place that mutates it. Every mutation synchronously writes the complete
//! collection back through the [`Persistence`] service, so the durable copy
//! always reflects the last completed operation. Insertion order is
//! preserved; nothing here sorts or filters (that is the query pipeline's
//! job).

use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeFields};
use crate::store::Persistence;

/// Well-known persistence key for the full collection.
pub const EMPLOYEES_KEY: &str = "employees";

pub struct RecordStore<P: Persistence> {
    persistence: P,
    employees: Vec<Employee>,
}

impl<P: Persistence> RecordStore<P> {
    /// Open the store, loading whatever collection the persistence service
    /// holds. An absent key reads back as an empty collection.
    pub fn open(persistence: P) -> Result<Self> {
        let employees = match persistence.load(EMPLOYEES_KEY)? {
            Some(blob) => serde_json::from_str(&blob).map_err(RosterError::Serialization)?,
            None => Vec::new(),
        };
        Ok(Self {
            persistence,
            employees,
        })
    }

    /// The full collection in insertion order.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Validate, assign a fresh id, append, persist.
    pub fn insert(&mut self, fields: EmployeeFields) -> Result<&Employee> {
        fields.validate()?;
        self.employees.push(Employee::new(fields));
        self.persist()?;
        Ok(self.employees.last().expect("just pushed"))
    }

    /// Validate, replace the record's fields wholesale (id preserved),
    /// persist. `NotFound` when the id is absent.
    pub fn update(&mut self, id: &str, fields: EmployeeFields) -> Result<&Employee> {
        fields.validate()?;
        let pos = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        self.employees[pos].set_fields(fields);
        self.persist()?;
        Ok(&self.employees[pos])
    }

    /// Remove one record and persist. Callers are responsible for pruning
    /// any selection set that referenced the id.
    pub fn delete(&mut self, id: &str) -> Result<Employee> {
        let pos = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        let removed = self.employees.remove(pos);
        self.persist()?;
        Ok(removed)
    }

    /// Insert every entry that passes validation, skipping the rest, with a
    /// single persisted write at the end. Returns how many were inserted;
    /// partial success is expected, not an error.
    pub fn bulk_insert(&mut self, entries: Vec<EmployeeFields>) -> Result<usize> {
        let mut inserted = 0;
        for fields in entries {
            if fields.validate().is_ok() {
                self.employees.push(Employee::new(fields));
                inserted += 1;
            }
        }
        if inserted > 0 {
            self.persist()?;
        }
        Ok(inserted)
    }

    /// Remove every record whose id appears in `ids`, in one persisted
    /// write. Unknown ids are ignored. Returns how many were removed.
    pub fn bulk_delete(&mut self, ids: &[String]) -> Result<usize> {
        let before = self.employees.len();
        self.employees.retain(|e| !ids.contains(&e.id));
        let removed = before - self.employees.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    // An empty collection removes the stored key entirely rather than
    // writing "[]", so "no data" and "empty array" stay distinguishable in
    // the store. Both read back as empty.
    fn persist(&mut self) -> Result<()> {
        if self.employees.is_empty() {
            self.persistence.remove(EMPLOYEES_KEY)
        } else {
            let blob =
                serde_json::to_string_pretty(&self.employees).map_err(RosterError::Serialization)?;
            self.persistence.save(EMPLOYEES_KEY, &blob)
        }
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn persistence_mut(&mut self) -> &mut P {
        &mut self.persistence
    }
}

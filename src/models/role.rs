use clap::ValueEnum;

/// The permission level an operation executes under.
///
/// `LunchAdmin` may act on behalf of other employees (create, edit their
/// records) but carries none of the other admin overrides; `Admin` bypasses
/// the holiday gate, the confirmation window, and state immutability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Employee,
    LunchAdmin,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Whether this role may target employees other than the operator.
    pub fn acts_for_others(&self) -> bool {
        matches!(self, Role::LunchAdmin | Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::LunchAdmin => "lunch-admin",
            Role::Admin => "admin",
        }
    }
}

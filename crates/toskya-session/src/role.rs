//! Roles and the profile actions they unlock.

use crate::SessionError;
use std::fmt;
use std::str::FromStr;

/// Role string stored by the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Store administrator.
    Admin,
    /// Seller.
    Vendedor,
    /// Customer.
    Cliente,
    /// No role stored, or one this storefront does not know.
    #[default]
    Guest,
}

impl Role {
    /// Get role as the stored string. `Guest` has none.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Role::Admin => Some("admin"),
            Role::Vendedor => Some("vendedor"),
            Role::Cliente => Some("cliente"),
            Role::Guest => None,
        }
    }

    /// Map a stored value to a role. Absent or unknown values become `Guest`.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::parse::<Role>) {
            Some(Ok(role)) => role,
            Some(Err(err)) => {
                tracing::debug!(%err, "stored role not recognized, using guest");
                Role::Guest
            }
            None => Role::Guest,
        }
    }

    /// Actions offered on the profile page, in display order.
    pub fn profile_actions(&self) -> Vec<ProfileAction> {
        let mut actions = vec![ProfileAction::ViewProfile];
        match self {
            Role::Admin => {
                actions.extend([ProfileAction::ManageUsers, ProfileAction::ViewMetrics]);
            }
            Role::Vendedor => {
                actions.extend([ProfileAction::ViewSales, ProfileAction::Commissions]);
            }
            Role::Cliente => {
                actions.extend([ProfileAction::MyPurchases, ProfileAction::ChangePassword]);
            }
            Role::Guest => {}
        }
        actions.push(ProfileAction::Logout);
        actions
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "vendedor" => Ok(Role::Vendedor),
            "cliente" => Ok(Role::Cliente),
            other => Err(SessionError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or("guest"))
    }
}

/// A button on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileAction {
    ViewProfile,
    ManageUsers,
    ViewMetrics,
    ViewSales,
    Commissions,
    MyPurchases,
    ChangePassword,
    Logout,
}

impl ProfileAction {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileAction::ViewProfile => "Ver detalles de perfil",
            ProfileAction::ManageUsers => "Administrar usuarios",
            ProfileAction::ViewMetrics => "Ver métricas generales",
            ProfileAction::ViewSales => "Ver ventas",
            ProfileAction::Commissions => "Comisiones",
            ProfileAction::MyPurchases => "Mis compras",
            ProfileAction::ChangePassword => "Cambiar contraseña",
            ProfileAction::Logout => "Cerrar sesión",
        }
    }
}

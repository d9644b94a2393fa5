use std::fmt;

/// The kinds of entity persisted by the repositories.
///
/// Carries the user-facing messages attached to each kind, so that
/// not-found errors and delete confirmations read the same everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Category,
    Car,
}

impl EntityKind {
    /// Message reported when an id-scoped operation matched no row.
    pub fn not_found_message(self) -> &'static str {
        match self {
            EntityKind::User => "Usuário não encontrado",
            EntityKind::Category => "Categoria não encontrada",
            EntityKind::Car => "Carro não encontrado",
        }
    }

    /// Message returned after a successful delete.
    pub fn deleted_message(self) -> &'static str {
        match self {
            EntityKind::User => "Usuário deletado com sucesso!",
            EntityKind::Category => "Categoria deletada com sucesso!",
            EntityKind::Car => "Carro deletado com sucesso!",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::Category => "Category",
            EntityKind::Car => "Car",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(EntityKind::User.not_found_message(), "Usuário não encontrado");
        assert_eq!(
            EntityKind::Category.not_found_message(),
            "Categoria não encontrada"
        );
        assert_eq!(EntityKind::Car.not_found_message(), "Carro não encontrado");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(EntityKind::User.to_string(), "User");
        assert_eq!(EntityKind::Category.to_string(), "Category");
        assert_eq!(EntityKind::Car.to_string(), "Car");
    }
}

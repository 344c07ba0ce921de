use super::errors::AccessError;
use super::model::Principal;

/// What a request wants to do with a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

/// Resource kinds the policy knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Category,
    Brand,
    Sector,
    Product,
    Bin,
    User,
}

/// Wire name of the promotion flag. Updates touching it are staff-only.
pub const PROMOTION_FIELD: &str = "on_promotion";

/// Single authorization gate for every use case.
///
/// All reads need an authenticated caller. Reference data (categories,
/// brands, sectors, bins) only changes through staff hands; products are
/// writable by any authenticated user except for the promotion flag.
/// Users are read-only through this API.
pub fn authorize(
    principal: &Principal,
    action: Action,
    resource: Resource,
    changed_fields: &[&str],
) -> Result<(), AccessError> {
    let user = match principal {
        Principal::Anonymous => return Err(AccessError::Unauthenticated),
        Principal::Known(user) => user,
    };

    if action == Action::Read {
        return Ok(());
    }

    match resource {
        Resource::Category | Resource::Brand | Resource::Sector | Resource::Bin => {
            if user.is_staff {
                Ok(())
            } else {
                Err(AccessError::Forbidden(
                    "only staff may modify this resource".to_string(),
                ))
            }
        }
        Resource::Product => {
            if changed_fields.contains(&PROMOTION_FIELD) && !user.is_staff {
                Err(AccessError::Forbidden(
                    "only staff may change the promotion flag".to_string(),
                ))
            } else {
                Ok(())
            }
        }
        Resource::User => Err(AccessError::Forbidden(
            "users are read-only".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn staff() -> Principal {
        Principal::known(Uuid::new_v4(), "warehouse-admin", true)
    }

    fn clerk() -> Principal {
        Principal::known(Uuid::new_v4(), "clerk", false)
    }

    #[test]
    fn should_reject_anonymous_reads() {
        let result = authorize(&Principal::Anonymous, Action::Read, Resource::Product, &[]);
        assert_eq!(result, Err(AccessError::Unauthenticated));
    }

    #[test]
    fn should_allow_any_authenticated_read() {
        for resource in [
            Resource::Category,
            Resource::Brand,
            Resource::Sector,
            Resource::Product,
            Resource::Bin,
            Resource::User,
        ] {
            assert!(authorize(&clerk(), Action::Read, resource, &[]).is_ok());
        }
    }

    #[test]
    fn should_restrict_reference_data_writes_to_staff() {
        for resource in [
            Resource::Category,
            Resource::Brand,
            Resource::Sector,
            Resource::Bin,
        ] {
            for action in [Action::Create, Action::Update, Action::Delete] {
                assert!(authorize(&staff(), action, resource, &[]).is_ok());
                assert!(matches!(
                    authorize(&clerk(), action, resource, &[]),
                    Err(AccessError::Forbidden(_))
                ));
            }
        }
    }

    #[test]
    fn should_allow_non_staff_product_writes_without_promotion() {
        assert!(authorize(&clerk(), Action::Create, Resource::Product, &[]).is_ok());
        assert!(authorize(&clerk(), Action::Update, Resource::Product, &["name"]).is_ok());
        assert!(authorize(&clerk(), Action::Delete, Resource::Product, &[]).is_ok());
    }

    #[test]
    fn should_reject_non_staff_promotion_changes() {
        let result = authorize(
            &clerk(),
            Action::Update,
            Resource::Product,
            &["name", PROMOTION_FIELD],
        );
        assert!(matches!(result, Err(AccessError::Forbidden(_))));
    }

    #[test]
    fn should_allow_staff_promotion_changes() {
        let result = authorize(&staff(), Action::Update, Resource::Product, &[PROMOTION_FIELD]);
        assert!(result.is_ok());
    }

    #[test]
    fn should_keep_users_read_only_even_for_staff() {
        assert!(matches!(
            authorize(&staff(), Action::Create, Resource::User, &[]),
            Err(AccessError::Forbidden(_))
        ));
    }
}

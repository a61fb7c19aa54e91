use toskya_session::{KeyValueStore, MemoryStore, ProfileAction, Role, SessionInfo, ROLE_KEY, USERNAME_KEY};

fn labels(session: &SessionInfo) -> Vec<&'static str> {
    session.role.profile_actions().iter().map(|a| a.label()).collect()
}

#[test]
fn login_then_profile_then_logout() {
    let mut store = MemoryStore::new();

    // Written by the login form after a successful token request.
    SessionInfo::new("marta", Role::from_stored(Some("vendedor")))
        .save(&mut store)
        .unwrap();
    assert_eq!(store.get(ROLE_KEY).unwrap().as_deref(), Some("vendedor"));

    let session = SessionInfo::load(&store).unwrap();
    assert!(session.is_logged_in());
    assert_eq!(session.display_name(), "marta");
    assert_eq!(
        labels(&session),
        vec!["Ver detalles de perfil", "Ver ventas", "Comisiones", "Cerrar sesión"]
    );

    SessionInfo::clear(&mut store).unwrap();
    let session = SessionInfo::load(&store).unwrap();
    assert_eq!(session, SessionInfo::guest());
    assert_eq!(labels(&session), vec!["Ver detalles de perfil", "Cerrar sesión"]);
}

#[test]
fn login_response_without_role_keeps_username_only() {
    let mut store = MemoryStore::new();
    SessionInfo::new("juan", Role::from_stored(None))
        .save(&mut store)
        .unwrap();

    assert_eq!(store.get(USERNAME_KEY).unwrap().as_deref(), Some("juan"));
    assert_eq!(store.get(ROLE_KEY).unwrap(), None);
}

#[test]
fn every_role_starts_with_details_and_ends_with_logout() {
    for role in [Role::Admin, Role::Vendedor, Role::Cliente, Role::Guest] {
        let actions = role.profile_actions();
        assert_eq!(actions.first(), Some(&ProfileAction::ViewProfile));
        assert_eq!(actions.last(), Some(&ProfileAction::Logout));
    }
}

#[test]
fn stored_role_with_wrong_case_is_guest() {
    let store = MemoryStore::with_entries([(USERNAME_KEY, "ana"), (ROLE_KEY, "ADMIN")]);
    let session = SessionInfo::load(&store).unwrap();
    assert_eq!(session.role, Role::Guest);
    assert_eq!(session.username.as_deref(), Some("ana"));
}

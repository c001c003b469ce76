//! Controller Integration Tests
//!
//! Drives `Phonebook` through `execute` against the in-memory service.

use phonebook_core::{
    execute, Completion, InMemoryPersonService, NotificationKind, Person, PersonId, PersonService, Phonebook,
    ServiceError,
};

fn seeded() -> InMemoryPersonService {
    InMemoryPersonService::with_persons(vec![
        Person::new("1", "Arto Hellas", "040-1231244"),
        Person::new("2", "Ada Lovelace", "39-44-5323523"),
    ])
}

async fn loaded(service: &InMemoryPersonService) -> Phonebook {
    let mut book = Phonebook::new();
    let request = book.start();
    let completion = execute(service, request).await;
    book.complete(completion);
    book
}

#[tokio::test]
async fn test_initial_load() {
    let service = seeded();
    let book = loaded(&service).await;

    assert_eq!(book.persons(), service.persons().as_slice());
    assert!(book.notifications().is_empty());
}

#[tokio::test]
async fn test_initial_load_failure() {
    let service = seeded();
    service.fail_next(ServiceError::Transport("connection refused".into()));
    let book = loaded(&service).await;

    assert!(book.persons().is_empty());
    assert_eq!(
        book.notifications().latest(NotificationKind::Error),
        Some("Failed to fetch data from the server.")
    );
}

#[tokio::test]
async fn test_add_new_person() {
    let service = seeded();
    let mut book = loaded(&service).await;

    book.set_new_name("Dan Abramov");
    book.set_new_number("12-43-234345");
    let request = book.submit().expect("create request");
    book.complete(execute(&service, request).await);

    assert_eq!(book.persons().len(), 3);
    let added = &book.persons()[2];
    assert_eq!(added.name, "Dan Abramov");
    assert_eq!(added.number, "12-43-234345");
    // id came from the server
    assert_eq!(added.id, PersonId::new("3"));
    assert_eq!(service.persons().len(), 3);
}

#[tokio::test]
async fn test_empty_submit_sends_nothing() {
    let service = InMemoryPersonService::new();
    let mut book = loaded(&service).await;
    let requests = service.requests();

    book.set_new_name("");
    book.set_new_number("555");
    assert!(book.submit().is_none());

    assert_eq!(service.requests(), requests);
    assert!(book.persons().is_empty());
    assert_eq!(book.new_number(), "555");
}

#[tokio::test]
async fn test_replace_number_after_confirm() {
    let service = InMemoryPersonService::with_persons(vec![Person::new("1", "Ada", "1")]);
    let mut book = loaded(&service).await;

    book.set_new_name("Ada");
    book.set_new_number("2");
    assert!(book.submit().is_none());
    let request = book.confirm().expect("update request");
    book.complete(execute(&service, request).await);

    assert_eq!(book.persons(), &[Person::new("1", "Ada", "2")]);
    assert_eq!(service.persons(), vec![Person::new("1", "Ada", "2")]);
    assert_eq!(book.new_name(), "");
    assert_eq!(book.new_number(), "");
    assert_eq!(
        book.notifications().latest(NotificationKind::Success),
        Some("Ada's number has been updated")
    );
}

#[tokio::test]
async fn test_replace_of_record_removed_elsewhere() {
    let service = seeded();
    let mut book = loaded(&service).await;
    service.forget(&PersonId::new("2"));

    book.set_new_name("Ada Lovelace");
    book.set_new_number("000");
    book.submit();
    let request = book.confirm().expect("update request");
    let completion = execute(&service, request).await;
    assert!(matches!(
        &completion,
        Completion::Updated { result: Err(e), .. } if e.is_not_found()
    ));
    book.complete(completion);

    assert_eq!(book.persons(), &[Person::new("1", "Arto Hellas", "040-1231244")]);
    assert_eq!(
        book.notifications().latest(NotificationKind::Error),
        Some("Information for Ada Lovelace has already been removed from the server")
    );
}

#[tokio::test]
async fn test_delete_confirmed() {
    let service = seeded();
    let mut book = loaded(&service).await;

    assert!(book.request_delete(&PersonId::new("1")));
    let request = book.confirm().expect("delete request");
    book.complete(execute(&service, request).await);

    assert_eq!(book.persons(), &[Person::new("2", "Ada Lovelace", "39-44-5323523")]);
    assert_eq!(service.persons().len(), 1);
    assert_eq!(
        book.notifications().latest(NotificationKind::Success),
        Some("Arto Hellas has been deleted from the phonebook")
    );
}

#[tokio::test]
async fn test_delete_declined() {
    let service = seeded();
    let mut book = loaded(&service).await;
    let requests = service.requests();

    book.request_delete(&PersonId::new("1"));
    book.cancel();

    assert_eq!(book.persons().len(), 2);
    assert_eq!(service.requests(), requests);
}

#[tokio::test]
async fn test_delete_failure_still_removes() {
    let service = seeded();
    let mut book = loaded(&service).await;
    service.forget(&PersonId::new("1"));

    book.request_delete(&PersonId::new("1"));
    let request = book.confirm().expect("delete request");
    book.complete(execute(&service, request).await);

    assert_eq!(book.persons().len(), 1);
    assert!(book.persons().iter().all(|p| p.id != PersonId::new("1")));
    assert_eq!(book.notifications().of_kind(NotificationKind::Error).count(), 1);
}

#[tokio::test]
async fn test_concurrent_notifications_expire_independently() {
    let service = InMemoryPersonService::new();
    let mut book = loaded(&service).await;

    book.set_new_name("Ada");
    book.set_new_number("1");
    let first = book.submit().expect("create");
    book.set_new_name("Dan");
    book.set_new_number("2");
    let second = book.submit().expect("create");

    let first_id = book.complete(execute(&service, first).await).unwrap();
    let second_id = book.complete(execute(&service, second).await).unwrap();

    // the first message's timer fires after the second message was raised
    assert!(book.dismiss(first_id));
    assert_eq!(
        book.notifications().latest(NotificationKind::Success),
        Some("Dan has been added to the phonebook")
    );
    assert!(book.dismiss(second_id));
    assert!(book.notifications().is_empty());
}

#[tokio::test]
async fn test_service_round_trip() {
    let service = InMemoryPersonService::new();
    let created = service
        .create(&phonebook_core::NewPerson::new("Mary", "39-23"))
        .await
        .unwrap();
    assert_eq!(created.id, PersonId::new("1"));

    let updated = service
        .update(&created.id, &phonebook_core::NewPerson::new("Mary", "00"))
        .await
        .unwrap();
    assert_eq!(updated.number, "00");

    service.remove(&created.id).await.unwrap();
    assert_eq!(
        service.remove(&created.id).await,
        Err(ServiceError::NotFound(created.id.clone()))
    );
    assert!(service.get_all().await.unwrap().is_empty());
}

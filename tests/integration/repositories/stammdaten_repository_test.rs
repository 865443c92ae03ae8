// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use kinobesuche::domain::models::einstellung::NewEinstellung;
use kinobesuche::domain::models::film::NewFilm;
use kinobesuche::domain::models::kino::NewKino;
use kinobesuche::domain::models::saal::NewSaal;
use kinobesuche::domain::repositories::einstellung_repository::EinstellungRepository;
use kinobesuche::domain::repositories::film_repository::FilmRepository;
use kinobesuche::domain::repositories::kino_repository::KinoRepository;
use kinobesuche::domain::repositories::saal_repository::SaalRepository;
use kinobesuche::domain::repositories::RepositoryError;
use kinobesuche::infrastructure::repositories::einstellung_repo_impl::EinstellungRepositoryImpl;
use kinobesuche::infrastructure::repositories::film_repo_impl::FilmRepositoryImpl;
use kinobesuche::infrastructure::repositories::kino_repo_impl::KinoRepositoryImpl;
use kinobesuche::infrastructure::repositories::saal_repo_impl::SaalRepositoryImpl;

#[tokio::test]
async fn test_film_repository_crud() {
    let db = create_test_db().await;
    let repo = FilmRepositoryImpl::new(db);

    let film = repo
        .create(&NewFilm {
            filmtitel: "Anatomie d'une chute".to_string(),
            bild_url: "https://img.example.com/a.jpg".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(repo.find_all().await.unwrap(), vec![film.clone()]);

    let mut changed = film.clone();
    changed.filmtitel = "Anatomy of a Fall".to_string();
    let updated = repo.update(&changed).await.unwrap();
    assert_eq!(updated.filmtitel, "Anatomy of a Fall");
    assert_eq!(updated.id, film.id);

    repo.delete(film.id).await.unwrap();
    assert!(repo.find_by_id(film.id).await.unwrap().is_none());
    assert!(matches!(
        repo.delete(film.id).await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn test_saal_exists_by_name_in_kino() {
    let db = create_test_db().await;
    let kino_repo = KinoRepositoryImpl::new(db.clone());
    let saal_repo = SaalRepositoryImpl::new(db);

    let kino = kino_repo
        .create(&NewKino {
            name: "Cinématte".to_string(),
            ort: "Bern".to_string(),
        })
        .await
        .unwrap();
    let saal = saal_repo
        .create(&NewSaal {
            name: "Grosser Saal".to_string(),
            kino_id: kino.id,
        })
        .await
        .unwrap();

    assert!(saal_repo
        .exists_by_name_in_kino("Grosser Saal", kino.id, None)
        .await
        .unwrap());
    assert!(!saal_repo
        .exists_by_name_in_kino("Grosser Saal", kino.id, Some(saal.id))
        .await
        .unwrap());
    assert!(!saal_repo
        .exists_by_name_in_kino("Kleiner Saal", kino.id, None)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_saal_unique_index() {
    let db = create_test_db().await;
    let kino_repo = KinoRepositoryImpl::new(db.clone());
    let saal_repo = SaalRepositoryImpl::new(db);

    let kino = kino_repo
        .create(&NewKino {
            name: "Cinématte".to_string(),
            ort: "Bern".to_string(),
        })
        .await
        .unwrap();
    let new = NewSaal {
        name: "Saal 1".to_string(),
        kino_id: kino.id,
    };
    saal_repo.create(&new).await.unwrap();

    let result = saal_repo.create(&new).await;
    assert!(matches!(result, Err(RepositoryError::UniqueViolation(_))));
}

#[tokio::test]
async fn test_einstellung_repository_by_key() {
    let db = create_test_db().await;
    let repo = EinstellungRepositoryImpl::new(db);

    let stored = repo
        .create(&NewEinstellung {
            key: "standard_kino".to_string(),
            value: "1".to_string(),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(
        repo.find_by_key("standard_kino").await.unwrap(),
        Some(stored.clone())
    );

    let mut changed = stored;
    changed.value = "2".to_string();
    changed.description = Some("Vorauswahl im Formular".to_string());
    let updated = repo.update(&changed).await.unwrap();
    assert_eq!(updated.value, "2");

    repo.delete_by_key("standard_kino").await.unwrap();
    assert!(repo.find_by_key("standard_kino").await.unwrap().is_none());
    assert!(matches!(
        repo.delete_by_key("standard_kino").await,
        Err(RepositoryError::NotFound)
    ));
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use chrono::NaiveDate;
use kinobesuche::domain::models::besuch::NewBesuch;
use kinobesuche::domain::models::film::NewFilm;
use kinobesuche::domain::models::kino::NewKino;
use kinobesuche::domain::models::saal::NewSaal;
use kinobesuche::domain::models::sprache::NewSprache;
use kinobesuche::domain::models::typ::NewTyp;
use kinobesuche::domain::repositories::besuch_repository::BesuchRepository;
use kinobesuche::domain::repositories::film_repository::FilmRepository;
use kinobesuche::domain::repositories::kino_repository::KinoRepository;
use kinobesuche::domain::repositories::saal_repository::SaalRepository;
use kinobesuche::domain::repositories::sprache_repository::SpracheRepository;
use kinobesuche::domain::repositories::typ_repository::TypRepository;
use kinobesuche::domain::repositories::RepositoryError;
use kinobesuche::infrastructure::repositories::besuch_repo_impl::BesuchRepositoryImpl;
use kinobesuche::infrastructure::repositories::film_repo_impl::FilmRepositoryImpl;
use kinobesuche::infrastructure::repositories::kino_repo_impl::KinoRepositoryImpl;
use kinobesuche::infrastructure::repositories::saal_repo_impl::SaalRepositoryImpl;
use kinobesuche::infrastructure::repositories::sprache_repo_impl::SpracheRepositoryImpl;
use kinobesuche::infrastructure::repositories::typ_repo_impl::TypRepositoryImpl;

fn kino(name: &str) -> NewKino {
    NewKino {
        name: name.to_string(),
        ort: "Bern".to_string(),
    }
}

fn saal(name: &str, kino_id: i32) -> NewSaal {
    NewSaal {
        name: name.to_string(),
        kino_id,
    }
}

/// 测试删除影院时一并删除其影厅
#[tokio::test]
async fn test_delete_with_saele_removes_only_own_saele() {
    let db = create_test_db().await;
    let kino_repo = KinoRepositoryImpl::new(db.clone());
    let saal_repo = SaalRepositoryImpl::new(db.clone());

    let bubenberg = kino_repo.create(&kino("Bubenberg")).await.unwrap();
    let rex = kino_repo.create(&kino("Rex")).await.unwrap();
    saal_repo.create(&saal("Saal 1", bubenberg.id)).await.unwrap();
    saal_repo.create(&saal("Saal 2", bubenberg.id)).await.unwrap();
    let rex_saal = saal_repo.create(&saal("Saal 1", rex.id)).await.unwrap();

    kino_repo.delete_with_saele(bubenberg.id).await.unwrap();

    assert!(kino_repo.find_by_id(bubenberg.id).await.unwrap().is_none());
    let remaining = saal_repo.find_all().await.unwrap();
    assert_eq!(remaining, vec![rex_saal]);
}

#[tokio::test]
async fn test_delete_with_saele_missing_kino() {
    let db = create_test_db().await;
    let kino_repo = KinoRepositoryImpl::new(db);

    let result = kino_repo.delete_with_saele(1).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

/// 测试按影院统计观影记录，以及被引用的影厅无法删除
#[tokio::test]
async fn test_count_besuche_in_kino_and_restrict() {
    let db = create_test_db().await;
    let kino_repo = KinoRepositoryImpl::new(db.clone());
    let saal_repo = SaalRepositoryImpl::new(db.clone());
    let film_repo = FilmRepositoryImpl::new(db.clone());
    let typ_repo = TypRepositoryImpl::new(db.clone());
    let sprache_repo = SpracheRepositoryImpl::new(db.clone());
    let besuch_repo = BesuchRepositoryImpl::new(db.clone());

    let kino_a = kino_repo.create(&kino("Kino A")).await.unwrap();
    let kino_b = kino_repo.create(&kino("Kino B")).await.unwrap();
    let saal_a = saal_repo.create(&saal("Saal 1", kino_a.id)).await.unwrap();
    let film = film_repo
        .create(&NewFilm {
            filmtitel: "Past Lives".to_string(),
            bild_url: "https://img.example.com/pl.jpg".to_string(),
        })
        .await
        .unwrap();
    let typ = typ_repo
        .create(&NewTyp {
            name: "AHV".to_string(),
            zuschlag_chf: 15.0,
        })
        .await
        .unwrap();
    let sprache = sprache_repo
        .create(&NewSprache {
            name: "Koreanisch".to_string(),
        })
        .await
        .unwrap();

    let anfang = NaiveDate::from_ymd_opt(2025, 4, 5)
        .unwrap()
        .and_hms_opt(18, 15, 0)
        .unwrap();
    let ende = NaiveDate::from_ymd_opt(2025, 4, 5)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap();
    let besuch = besuch_repo
        .create(&NewBesuch {
            anfang,
            ende,
            reihe: "C".to_string(),
            platz: 7,
            untertitel: true,
            snackzuschlag_chf: Some(4.999),
            film_id: film.id,
            typ_id: typ.id,
            sprache_id: sprache.id,
            saal_id: saal_a.id,
        })
        .await
        .unwrap();
    assert_eq!(besuch.anfang, anfang);
    assert_eq!(besuch.snackzuschlag_chf, Some(5.0));

    assert_eq!(kino_repo.count_besuche_in_kino(kino_a.id).await.unwrap(), 1);
    assert_eq!(kino_repo.count_besuche_in_kino(kino_b.id).await.unwrap(), 0);

    let result = saal_repo.delete(saal_a.id).await;
    assert!(matches!(result, Err(RepositoryError::ForeignKeyViolation(_))));

    let result = film_repo.delete(film.id).await;
    assert!(matches!(result, Err(RepositoryError::ForeignKeyViolation(_))));
}

#[tokio::test]
async fn test_update_kino_keeps_created_at() {
    let db = create_test_db().await;
    let kino_repo = KinoRepositoryImpl::new(db);

    let mut stored = kino_repo.create(&kino("Lichtspiele")).await.unwrap();
    stored.ort = "Thun".to_string();

    let updated = kino_repo.update(&stored).await.unwrap();
    assert_eq!(updated.ort, "Thun");
    assert_eq!(updated.created_at, stored.created_at);
    assert!(updated.updated_at >= stored.updated_at);
}

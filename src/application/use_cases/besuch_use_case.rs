// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::besuch_request::{CreateBesuchDto, UpdateBesuchDto};
use crate::application::dto::date_time::parse_date_time;
use crate::application::use_cases::error::{require, FieldErrors, ServiceError};
use crate::domain::models::besuch::{Besuch, NewBesuch};
use crate::domain::repositories::{
    besuch_repository::BesuchRepository, film_repository::FilmRepository,
    saal_repository::SaalRepository, sprache_repository::SpracheRepository,
    typ_repository::TypRepository, RepositoryError,
};
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::info;

const RESOURCE: &str = "Besuch";

/// 观影记录引用的四个外键，`None` 表示本次不检查
#[derive(Debug, Default, Clone, Copy)]
struct References {
    film_id: Option<i32>,
    typ_id: Option<i32>,
    sprache_id: Option<i32>,
    saal_id: Option<i32>,
}

/// 观影记录用例
///
/// 写入前检查四个外键指向的记录是否存在，不存在的以字段错误一次性返回。
pub struct BesuchUseCase<BR, FR, TR, SR, SaR> {
    besuch_repo: Arc<BR>,
    film_repo: Arc<FR>,
    typ_repo: Arc<TR>,
    sprache_repo: Arc<SR>,
    saal_repo: Arc<SaR>,
}

impl<BR, FR, TR, SR, SaR> BesuchUseCase<BR, FR, TR, SR, SaR>
where
    BR: BesuchRepository + 'static,
    FR: FilmRepository + 'static,
    TR: TypRepository + 'static,
    SR: SpracheRepository + 'static,
    SaR: SaalRepository + 'static,
{
    pub fn new(
        besuch_repo: Arc<BR>,
        film_repo: Arc<FR>,
        typ_repo: Arc<TR>,
        sprache_repo: Arc<SR>,
        saal_repo: Arc<SaR>,
    ) -> Self {
        Self {
            besuch_repo,
            film_repo,
            typ_repo,
            sprache_repo,
            saal_repo,
        }
    }

    pub async fn list(&self) -> Result<Vec<Besuch>, ServiceError> {
        Ok(self.besuch_repo.find_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Besuch, ServiceError> {
        self.besuch_repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    pub async fn create(&self, dto: CreateBesuchDto) -> Result<Besuch, ServiceError> {
        let new = NewBesuch {
            anfang: date_field("anfang", require("anfang", dto.anfang)?)?,
            ende: date_field("ende", require("ende", dto.ende)?)?,
            reihe: require("reihe", dto.reihe)?,
            platz: platz_field(require("platz", dto.platz)?)?,
            untertitel: require("untertitel", dto.untertitel)?,
            snackzuschlag_chf: dto.snackzuschlag_chf,
            film_id: require("film_id", dto.film_id)?,
            typ_id: require("typ_id", dto.typ_id)?,
            sprache_id: require("sprache_id", dto.sprache_id)?,
            saal_id: require("saal_id", dto.saal_id)?,
        };

        self.ensure_references(References {
            film_id: Some(new.film_id),
            typ_id: Some(new.typ_id),
            sprache_id: Some(new.sprache_id),
            saal_id: Some(new.saal_id),
        })
        .await?;

        let besuch = self.besuch_repo.create(&new).await?;
        info!(
            "Created besuch {} for film {} in saal {}",
            besuch.id, besuch.film_id, besuch.saal_id
        );
        Ok(besuch)
    }

    pub async fn update(&self, id: i32, dto: UpdateBesuchDto) -> Result<Besuch, ServiceError> {
        let mut besuch = self.get(id).await?;

        self.ensure_references(References {
            film_id: dto.film_id,
            typ_id: dto.typ_id,
            sprache_id: dto.sprache_id,
            saal_id: dto.saal_id,
        })
        .await?;

        if let Some(anfang) = dto.anfang {
            besuch.anfang = date_field("anfang", anfang)?;
        }
        if let Some(ende) = dto.ende {
            besuch.ende = date_field("ende", ende)?;
        }
        if let Some(reihe) = dto.reihe {
            besuch.reihe = reihe;
        }
        if let Some(platz) = dto.platz {
            besuch.platz = platz_field(platz)?;
        }
        if let Some(untertitel) = dto.untertitel {
            besuch.untertitel = untertitel;
        }
        if let Some(snackzuschlag_chf) = dto.snackzuschlag_chf {
            besuch.snackzuschlag_chf = Some(snackzuschlag_chf);
        }
        besuch.film_id = dto.film_id.unwrap_or(besuch.film_id);
        besuch.typ_id = dto.typ_id.unwrap_or(besuch.typ_id);
        besuch.sprache_id = dto.sprache_id.unwrap_or(besuch.sprache_id);
        besuch.saal_id = dto.saal_id.unwrap_or(besuch.saal_id);

        Ok(self.besuch_repo.update(&besuch).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        match self.besuch_repo.delete(id).await {
            Ok(()) => {
                info!("Deleted besuch {}", id);
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(RESOURCE)),
            Err(e) => Err(e.into()),
        }
    }

    async fn ensure_references(&self, refs: References) -> Result<(), ServiceError> {
        let mut errors = FieldErrors::new();

        if let Some(id) = refs.film_id {
            if self.film_repo.find_by_id(id).await?.is_none() {
                add_invalid(&mut errors, "film_id");
            }
        }
        if let Some(id) = refs.typ_id {
            if self.typ_repo.find_by_id(id).await?.is_none() {
                add_invalid(&mut errors, "typ_id");
            }
        }
        if let Some(id) = refs.sprache_id {
            if self.sprache_repo.find_by_id(id).await?.is_none() {
                add_invalid(&mut errors, "sprache_id");
            }
        }
        if let Some(id) = refs.saal_id {
            if self.saal_repo.find_by_id(id).await?.is_none() {
                add_invalid(&mut errors, "saal_id");
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(errors))
        }
    }
}

fn add_invalid(errors: &mut FieldErrors, field: &str) {
    errors.insert(
        field.to_string(),
        vec![format!("Der gewählte Wert für {} ist ungültig.", field)],
    );
}

fn date_field(field: &str, value: String) -> Result<NaiveDateTime, ServiceError> {
    parse_date_time(&value).ok_or_else(|| {
        ServiceError::field(field, format!("Das Feld {} muss ein gültiges Datum sein.", field))
    })
}

fn platz_field(platz: i64) -> Result<i16, ServiceError> {
    i16::try_from(platz)
        .ok()
        .filter(|platz| (1..=255).contains(platz))
        .ok_or_else(|| ServiceError::field("platz", "Das Feld platz muss zwischen 1 und 255 liegen."))
}

use crate::{
    EntityKind, MissionForm, PlanetForm, ScientistForm, ScientistPatch, ServiceError,
    ServiceResult,
};
use ::entity::{
    mission, planet,
    prelude::*,
    scientist,
    validation::{assign, ValidationError, ValidationErrors},
};
use sea_orm::*;
use tracing::{debug, info};

pub struct Mutation;

impl Mutation {
    pub async fn create_scientist(
        db: &DbConn,
        form_data: ScientistForm,
    ) -> ServiceResult<scientist::Model> {
        let scientist = scientist::ActiveModel {
            name: assign(form_data.name),
            field_of_study: assign(form_data.field_of_study),
            ..Default::default()
        };
        if let Err(errors) = scientist.validate(true) {
            debug!(%errors, "scientist rejected");
            return Err(errors.into());
        }

        let scientist = scientist.insert(db).await?;
        info!(id = scientist.id, "scientist created");
        Ok(scientist)
    }

    /// Apply the allowed fields of `patch` and re-validate each of them.
    /// An empty patch returns the stored row untouched.
    pub async fn update_scientist_by_id(
        db: &DbConn,
        id: i32,
        patch: ScientistPatch,
    ) -> ServiceResult<scientist::Model> {
        let txn = db.begin().await?;

        let Some(existing) = Scientist::find_by_id(id).one(&txn).await? else {
            return Err(ServiceError::NotFound(EntityKind::Scientist));
        };

        let mut scientist: scientist::ActiveModel = existing.clone().into();
        if let Some(name) = patch.name {
            scientist.name = Set(name.unwrap_or_default());
        }
        if let Some(field_of_study) = patch.field_of_study {
            scientist.field_of_study = Set(field_of_study.unwrap_or_default());
        }
        if let Err(errors) = scientist.validate(false) {
            debug!(id, %errors, "scientist patch rejected");
            return Err(errors.into());
        }
        if !scientist.is_changed() {
            return Ok(existing);
        }

        let scientist = scientist.update(&txn).await?;
        txn.commit().await?;
        info!(id, "scientist updated");
        Ok(scientist)
    }

    /// Delete a scientist together with every mission that references it.
    /// Returns how many missions were removed.
    pub async fn delete_scientist(db: &DbConn, id: i32) -> ServiceResult<u64> {
        let txn = db.begin().await?;

        if Scientist::find_by_id(id).one(&txn).await?.is_none() {
            return Err(ServiceError::NotFound(EntityKind::Scientist));
        }

        let missions = Mission::delete_many()
            .filter(mission::Column::ScientistId.eq(id))
            .exec(&txn)
            .await?;
        Scientist::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(id, missions = missions.rows_affected, "scientist deleted");
        Ok(missions.rows_affected)
    }

    pub async fn create_planet(db: &DbConn, form_data: PlanetForm) -> ServiceResult<planet::Model> {
        let planet = planet::ActiveModel {
            name: Set(form_data.name),
            distance_from_earth: Set(form_data.distance_from_earth),
            nearest_star: Set(form_data.nearest_star),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(id = planet.id, "planet created");
        Ok(planet)
    }

    /// Field validation runs first. The referenced scientist and planet are
    /// then looked up in the same transaction as the insert, so a dangling id
    /// is reported as a validation failure.
    pub async fn create_mission(
        db: &DbConn,
        form_data: MissionForm,
    ) -> ServiceResult<mission::Model> {
        let MissionForm {
            name,
            scientist_id,
            planet_id,
        } = form_data;

        let mission = mission::ActiveModel {
            name: assign(name),
            scientist_id: assign(scientist_id),
            planet_id: assign(planet_id),
            ..Default::default()
        };
        if let Err(errors) = mission.validate(true) {
            debug!(%errors, "mission rejected");
            return Err(errors.into());
        }

        let txn = db.begin().await?;

        let mut errors = ValidationErrors::new();
        if let Some(id) = scientist_id {
            if Scientist::find_by_id(id).one(&txn).await?.is_none() {
                errors.push(ValidationError {
                    field: "scientist_id",
                    reason: "does not reference an existing scientist",
                });
            }
        }
        if let Some(id) = planet_id {
            if Planet::find_by_id(id).one(&txn).await?.is_none() {
                errors.push(ValidationError {
                    field: "planet_id",
                    reason: "does not reference an existing planet",
                });
            }
        }
        if let Err(errors) = errors.into_result() {
            debug!(%errors, "mission rejected");
            return Err(errors.into());
        }

        let mission = mission.insert(&txn).await?;
        txn.commit().await?;

        info!(
            id = mission.id,
            scientist_id = mission.scientist_id,
            planet_id = mission.planet_id,
            "mission created"
        );
        Ok(mission)
    }
}

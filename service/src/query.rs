use ::entity::{mission, planet, prelude::*, scientist};
use sea_orm::*;

pub struct Query;

impl Query {
    pub async fn find_scientist_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<scientist::Model>, DbErr> {
        Scientist::find_by_id(id).one(db).await
    }

    pub async fn get_all_scientists(db: &DbConn) -> Result<Vec<scientist::Model>, DbErr> {
        Scientist::find()
            .order_by_asc(scientist::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_planet_by_id(db: &DbConn, id: i32) -> Result<Option<planet::Model>, DbErr> {
        Planet::find_by_id(id).one(db).await
    }

    pub async fn get_all_planets(db: &DbConn) -> Result<Vec<planet::Model>, DbErr> {
        Planet::find()
            .order_by_asc(planet::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_mission_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<mission::Model>, DbErr> {
        Mission::find_by_id(id).one(db).await
    }

    pub async fn get_all_missions(db: &DbConn) -> Result<Vec<mission::Model>, DbErr> {
        Mission::find()
            .order_by_asc(mission::Column::Id)
            .all(db)
            .await
    }
}

use crate::{ApiError, AppState, Payload};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mission_control_service::{
    serializer::{serialize, serialize_all, DbGraph, Exclusions, Record},
    EntityKind, MissionForm, Mutation, PlanetForm, Query, ScientistForm, ScientistPatch,
    ServiceError,
};
use serde_json::Value;

type ApiResult<T> = Result<T, ApiError>;

pub async fn home() -> &'static str {
    ""
}

pub async fn list_scientists(state: State<AppState>) -> ApiResult<Json<Value>> {
    let scientists = Query::get_all_scientists(&state.conn)
        .await
        .map_err(ServiceError::from)?;
    let body = serialize_all(
        &DbGraph(&state.conn),
        EntityKind::Scientist,
        scientists,
        &Exclusions::scalars_only(EntityKind::Scientist),
    )
    .await?;

    Ok(Json(body))
}

pub async fn create_scientist(
    state: State<AppState>,
    Payload(form): Payload<ScientistForm>,
) -> ApiResult<impl IntoResponse> {
    let scientist = Mutation::create_scientist(&state.conn, form).await?;
    let body = serialize(
        &DbGraph(&state.conn),
        &scientist.into(),
        &Exclusions::scalars_only(EntityKind::Scientist),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn get_scientist(state: State<AppState>, Path(id): Path<i32>) -> ApiResult<Json<Value>> {
    let scientist = Query::find_scientist_by_id(&state.conn, id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ApiError::NotFound(EntityKind::Scientist))?;
    let body = serialize(&DbGraph(&state.conn), &scientist.into(), &Exclusions::none()).await?;

    Ok(Json(body))
}

pub async fn update_scientist(
    state: State<AppState>,
    Path(id): Path<i32>,
    patch: Result<Payload<ScientistPatch>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    // A missing scientist is reported before a rejected body
    Query::find_scientist_by_id(&state.conn, id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ApiError::NotFound(EntityKind::Scientist))?;
    let Payload(patch) = patch?;

    let scientist = Mutation::update_scientist_by_id(&state.conn, id, patch).await?;
    let body = serialize(
        &DbGraph(&state.conn),
        &scientist.into(),
        &Exclusions::scalars_only(EntityKind::Scientist),
    )
    .await?;

    Ok((StatusCode::ACCEPTED, Json(body)))
}

pub async fn delete_scientist(
    state: State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    Mutation::delete_scientist(&state.conn, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_planets(state: State<AppState>) -> ApiResult<Json<Value>> {
    let planets = Query::get_all_planets(&state.conn)
        .await
        .map_err(ServiceError::from)?;
    let body = serialize_all(
        &DbGraph(&state.conn),
        EntityKind::Planet,
        planets,
        &Exclusions::scalars_only(EntityKind::Planet),
    )
    .await?;

    Ok(Json(body))
}

pub async fn create_planet(
    state: State<AppState>,
    Payload(form): Payload<PlanetForm>,
) -> ApiResult<impl IntoResponse> {
    let planet = Mutation::create_planet(&state.conn, form).await?;
    let body = serialize(
        &DbGraph(&state.conn),
        &planet.into(),
        &Exclusions::scalars_only(EntityKind::Planet),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn get_planet(state: State<AppState>, Path(id): Path<i32>) -> ApiResult<Json<Value>> {
    let planet = Query::find_planet_by_id(&state.conn, id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ApiError::NotFound(EntityKind::Planet))?;
    let body = serialize(&DbGraph(&state.conn), &planet.into(), &Exclusions::none()).await?;

    Ok(Json(body))
}

pub async fn list_missions(state: State<AppState>) -> ApiResult<Json<Value>> {
    let missions = Query::get_all_missions(&state.conn)
        .await
        .map_err(ServiceError::from)?;
    let body = serialize_all(
        &DbGraph(&state.conn),
        EntityKind::Mission,
        missions,
        &Exclusions::scalars_only(EntityKind::Mission),
    )
    .await?;

    Ok(Json(body))
}

pub async fn create_mission(
    state: State<AppState>,
    Payload(form): Payload<MissionForm>,
) -> ApiResult<impl IntoResponse> {
    let mission = Mutation::create_mission(&state.conn, form).await?;
    let record: Record = mission.into();
    let body = serialize(&DbGraph(&state.conn), &record, &Exclusions::none()).await?;

    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn get_mission(state: State<AppState>, Path(id): Path<i32>) -> ApiResult<Json<Value>> {
    let mission = Query::find_mission_by_id(&state.conn, id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ApiError::NotFound(EntityKind::Mission))?;
    let body = serialize(&DbGraph(&state.conn), &mission.into(), &Exclusions::none()).await?;

    Ok(Json(body))
}

//! Department, room, locker and folder handlers
//!
//! Listings are plain proxies. Creation and updates of containers are checked
//! locally before forwarding: a capacity of zero is never accepted, and an
//! update may not shrink a container below what it already holds.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};

use crate::client::Credential;
use crate::error::{AppError, AppResult, OptionExt};
use crate::model::{
    CreateDepartment, CreateFolder, CreateLocker, CreateRoom, Department, Folder, Locker,
    PossibleFolder, Room, UpdateDepartment, UpdateFolder, UpdateLocker, UpdateRoom,
};
use crate::routes::ApiResponse;
use crate::state::AppState;
use crate::tree::{find_folder, folder_load, Occupancy};

const MAX_NAME_LEN: usize = 64;

/// Reject empty or overlong container names
pub fn validate_name(name: &str) -> AppResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "Name must not exceed {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// Capacity must be positive and, on update, not below the current load
pub fn validate_capacity(capacity: u32, current_load: u64) -> AppResult<()> {
    if capacity == 0 {
        return Err(AppError::Validation(
            "Capacity must be a positive number".to_string(),
        ));
    }
    if u64::from(capacity) < current_load {
        return Err(AppError::Validation(format!(
            "Capacity {} is below the current load of {}",
            capacity, current_load
        )));
    }
    Ok(())
}

/// Body of a container update; the id comes from the path
#[derive(Debug, Deserialize)]
pub struct UpdateContainerRequest {
    pub name: String,
    pub capacity: u32,
}

/// GET /api/departments
pub async fn list_departments(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
) -> AppResult<Json<ApiResponse<Vec<Department>>>> {
    let departments = state.client.departments(&cred).await?;
    Ok(Json(ApiResponse::success(departments)))
}

/// GET /api/departments/:id
pub async fn get_department(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Department>>> {
    let department = state.client.department(&cred, &id).await?;
    Ok(Json(ApiResponse::success(department)))
}

/// POST /api/departments
pub async fn create_department(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Json(req): Json<CreateDepartment>,
) -> AppResult<Json<ApiResponse<Department>>> {
    validate_name(&req.name)?;
    let department = state.client.create_department(&cred, &req).await?;
    tracing::info!("Created department {} ({})", department.name, department.id);
    Ok(Json(ApiResponse::success(department)))
}

#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub name: String,
}

/// PUT /api/departments/:id
pub async fn update_department(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
    Json(req): Json<RenameRequest>,
) -> AppResult<Json<ApiResponse<Department>>> {
    validate_name(&req.name)?;
    let body = UpdateDepartment { id, name: req.name };
    let department = state.client.update_department(&cred, &body).await?;
    Ok(Json(ApiResponse::success(department)))
}

/// DELETE /api/departments/:id
pub async fn delete_department(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.client.delete_department(&cred, &id).await?;
    tracing::info!("Deleted department {}", id);
    Ok(Json(ApiResponse::success(())))
}

/// GET /api/departments/:id/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(department_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Room>>>> {
    let rooms = state.client.rooms(&cred, &department_id).await?;
    Ok(Json(ApiResponse::success(rooms)))
}

/// GET /api/rooms/:id/lockers
pub async fn list_lockers(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(room_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Locker>>>> {
    let lockers = state.client.lockers(&cred, &room_id).await?;
    Ok(Json(ApiResponse::success(lockers)))
}

/// GET /api/lockers/:id/folders
pub async fn list_folders(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(locker_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Folder>>>> {
    let folders = state.client.folders(&cred, &locker_id).await?;
    Ok(Json(ApiResponse::success(folders)))
}

/// GET /api/rooms/:id
pub async fn get_room(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Room>>> {
    let room = state.client.room(&cred, &id).await?;
    Ok(Json(ApiResponse::success(room)))
}

/// GET /api/lockers/:id
pub async fn get_locker(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Locker>>> {
    let locker = state.client.locker(&cred, &id).await?;
    Ok(Json(ApiResponse::success(locker)))
}

/// GET /api/folders/:id
pub async fn get_folder(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Folder>>> {
    let folder = state.client.folder(&cred, &id).await?;
    Ok(Json(ApiResponse::success(folder)))
}

/// DELETE /api/rooms/:id
pub async fn delete_room(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.client.delete_room(&cred, &id).await?;
    tracing::info!("Deleted room {}", id);
    Ok(Json(ApiResponse::success(())))
}

/// DELETE /api/lockers/:id
pub async fn delete_locker(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.client.delete_locker(&cred, &id).await?;
    tracing::info!("Deleted locker {}", id);
    Ok(Json(ApiResponse::success(())))
}

/// DELETE /api/folders/:id
pub async fn delete_folder(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.client.delete_folder(&cred, &id).await?;
    tracing::info!("Deleted folder {}", id);
    Ok(Json(ApiResponse::success(())))
}

/// POST /api/rooms
pub async fn create_room(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Json(req): Json<CreateRoom>,
) -> AppResult<Json<ApiResponse<Room>>> {
    validate_name(&req.name)?;
    validate_capacity(req.capacity, 0)?;
    let room = state.client.create_room(&cred, &req).await?;
    tracing::info!("Created room {} ({}) in department {}", room.name, room.id, req.department.id);
    Ok(Json(ApiResponse::success(room)))
}

/// PUT /api/rooms/:id
pub async fn update_room(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
    Json(req): Json<UpdateContainerRequest>,
) -> AppResult<Json<ApiResponse<Room>>> {
    validate_name(&req.name)?;
    let lockers = state.client.lockers(&cred, &id).await?;
    validate_capacity(req.capacity, lockers.len() as u64)?;

    let body = UpdateRoom {
        id,
        name: req.name,
        capacity: req.capacity,
    };
    let room = state.client.update_room(&cred, &body).await?;
    Ok(Json(ApiResponse::success(room)))
}

/// POST /api/lockers
pub async fn create_locker(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Json(req): Json<CreateLocker>,
) -> AppResult<Json<ApiResponse<Locker>>> {
    validate_name(&req.name)?;
    validate_capacity(req.capacity, 0)?;
    let locker = state.client.create_locker(&cred, &req).await?;
    tracing::info!("Created locker {} ({}) in room {}", locker.name, locker.id, req.room.id);
    Ok(Json(ApiResponse::success(locker)))
}

/// PUT /api/lockers/:id
pub async fn update_locker(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
    Json(req): Json<UpdateContainerRequest>,
) -> AppResult<Json<ApiResponse<Locker>>> {
    validate_name(&req.name)?;
    let folders = state.client.folders(&cred, &id).await?;
    validate_capacity(req.capacity, folders.len() as u64)?;

    let body = UpdateLocker {
        id,
        name: req.name,
        capacity: req.capacity,
    };
    let locker = state.client.update_locker(&cred, &body).await?;
    Ok(Json(ApiResponse::success(locker)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Json(req): Json<CreateFolder>,
) -> AppResult<Json<ApiResponse<Folder>>> {
    validate_name(&req.name)?;
    validate_capacity(req.capacity, 0)?;
    let folder = state.client.create_folder(&cred, &req).await?;
    tracing::info!("Created folder {} ({}) in locker {}", folder.name, folder.id, req.locker.id);
    Ok(Json(ApiResponse::success(folder)))
}

/// PUT /api/folders/:id
pub async fn update_folder(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
    Json(req): Json<UpdateContainerRequest>,
) -> AppResult<Json<ApiResponse<Folder>>> {
    validate_name(&req.name)?;
    let folder = state.client.folder(&cred, &id).await?;
    let load = match folder.current {
        Some(pages) => pages,
        None => {
            // Folder detail may omit the page count; fall back to the tree.
            let trees = state.client.document_tree(&cred).await?;
            let found = find_folder(&trees, &id)
                .ok_or_not_found(format!("Folder {} not found in document tree", id))?;
            folder_load(found)
        }
    };
    validate_capacity(req.capacity, load)?;

    let body = UpdateFolder {
        id,
        name: req.name,
        capacity: req.capacity,
    };
    let folder = state.client.update_folder(&cred, &body).await?;
    Ok(Json(ApiResponse::success(folder)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestQuery {
    pub department_id: String,
    pub num_of_pages: u32,
}

/// A folder that can take the document, with where it sits
#[derive(Debug, Serialize)]
pub struct SuggestedFolder {
    pub room: String,
    pub locker: String,
    pub folder: PossibleFolder,
    pub occupancy: Occupancy,
}

/// GET /api/folders/suggested?departmentId=&numOfPages=
pub async fn suggest_folders(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Query(query): Query<SuggestQuery>,
) -> AppResult<Json<ApiResponse<Vec<SuggestedFolder>>>> {
    let locations = state
        .client
        .possible_locations(&cred, &query.department_id, query.num_of_pages)
        .await?;

    let mut suggestions = Vec::new();
    for room in &locations {
        for locker in &room.lockers {
            for folder in locker.open_folders(query.num_of_pages) {
                suggestions.push(SuggestedFolder {
                    room: room.name.clone(),
                    locker: locker.name.clone(),
                    folder: folder.clone(),
                    occupancy: folder.occupancy(),
                });
            }
        }
    }
    Ok(Json(ApiResponse::success(suggestions)))
}

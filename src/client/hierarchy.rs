//! Departments, rooms, lockers and folders

use super::{ApiClient, ClientResult, Credential};
use crate::model::{
    Category, CreateDepartment, CreateFolder, CreateLocker, CreateRoom, Department, DepartmentTree,
    Folder, Locker, PossibleLocation, Room, UpdateDepartment, UpdateFolder, UpdateLocker,
    UpdateRoom,
};

impl ApiClient {
    /// Full department → document tree
    pub async fn document_tree(&self, cred: &Credential) -> ClientResult<Vec<DepartmentTree>> {
        self.get("/trees", cred).await
    }

    pub async fn departments(&self, cred: &Credential) -> ClientResult<Vec<Department>> {
        self.get("/departments", cred).await
    }

    pub async fn department(&self, cred: &Credential, id: &str) -> ClientResult<Department> {
        self.get(("/departments", id), cred).await
    }

    pub async fn create_department(
        &self,
        cred: &Credential,
        body: &CreateDepartment,
    ) -> ClientResult<Department> {
        self.post("/departments", body, cred).await
    }

    pub async fn update_department(
        &self,
        cred: &Credential,
        body: &UpdateDepartment,
    ) -> ClientResult<Department> {
        self.put(("/departments", body.id.as_str()), body, cred)
            .await
    }

    pub async fn delete_department(&self, cred: &Credential, id: &str) -> ClientResult<()> {
        self.delete(("/departments", id), cred).await
    }

    pub async fn rooms(&self, cred: &Credential, department_id: &str) -> ClientResult<Vec<Room>> {
        self.get_query("/rooms/", &[("departmentId", department_id)], cred)
            .await
    }

    pub async fn room(&self, cred: &Credential, id: &str) -> ClientResult<Room> {
        self.get(("/rooms", id), cred).await
    }

    pub async fn create_room(&self, cred: &Credential, body: &CreateRoom) -> ClientResult<Room> {
        self.post("/rooms", body, cred).await
    }

    pub async fn update_room(&self, cred: &Credential, body: &UpdateRoom) -> ClientResult<Room> {
        self.put(("/rooms", body.id.as_str()), body, cred).await
    }

    pub async fn delete_room(&self, cred: &Credential, id: &str) -> ClientResult<()> {
        self.delete(("/rooms", id), cred).await
    }

    pub async fn lockers(&self, cred: &Credential, room_id: &str) -> ClientResult<Vec<Locker>> {
        self.get_query("/lockers/", &[("roomId", room_id)], cred)
            .await
    }

    pub async fn locker(&self, cred: &Credential, id: &str) -> ClientResult<Locker> {
        self.get(("/lockers", id), cred).await
    }

    pub async fn create_locker(
        &self,
        cred: &Credential,
        body: &CreateLocker,
    ) -> ClientResult<Locker> {
        self.post("/lockers", body, cred).await
    }

    pub async fn update_locker(
        &self,
        cred: &Credential,
        body: &UpdateLocker,
    ) -> ClientResult<Locker> {
        self.put(("/lockers", body.id.as_str()), body, cred).await
    }

    pub async fn delete_locker(&self, cred: &Credential, id: &str) -> ClientResult<()> {
        self.delete(("/lockers", id), cred).await
    }

    pub async fn folders(&self, cred: &Credential, locker_id: &str) -> ClientResult<Vec<Folder>> {
        self.get_query("/folders/", &[("lockerId", locker_id)], cred)
            .await
    }

    pub async fn folder(&self, cred: &Credential, id: &str) -> ClientResult<Folder> {
        self.get(("/folders", id), cred).await
    }

    pub async fn create_folder(
        &self,
        cred: &Credential,
        body: &CreateFolder,
    ) -> ClientResult<Folder> {
        self.post("/folders", body, cred).await
    }

    pub async fn update_folder(
        &self,
        cred: &Credential,
        body: &UpdateFolder,
    ) -> ClientResult<Folder> {
        self.put(("/folders", body.id.as_str()), body, cred).await
    }

    pub async fn delete_folder(&self, cred: &Credential, id: &str) -> ClientResult<()> {
        self.delete(("/folders", id), cred).await
    }

    /// Rooms, lockers and folders in a department that could hold `pages`
    pub async fn possible_locations(
        &self,
        cred: &Credential,
        department_id: &str,
        pages: u32,
    ) -> ClientResult<Vec<PossibleLocation>> {
        self.get_query(
            "/folders/suggested",
            &[
                ("departmentId", department_id.to_string()),
                ("numOfPages", pages.to_string()),
            ],
            cred,
        )
        .await
    }

    pub async fn categories(
        &self,
        cred: &Credential,
        department_id: &str,
    ) -> ClientResult<Vec<Category>> {
        self.get_query("/categories/", &[("departmentId", department_id)], cred)
            .await
    }
}

//! Borrow and import request workflows
//!
//! Both workflows expose the same endpoint shape under different roots, so
//! the calls are written once against [`RequestRecord`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use super::{ApiClient, ClientResult, Credential};
use crate::model::{
    AnalysisData, BorrowRequest, CreateBorrowRequest, CreateImportRequest, ImportRequest, Reject,
    RequestFilter, RequestStatus, Requester, VerifyRequest,
};
use crate::pagination::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    Borrow,
    Import,
}

impl RequestKind {
    pub fn root(self) -> &'static str {
        match self {
            RequestKind::Borrow => "/borrow-requests",
            RequestKind::Import => "/import-requests",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            RequestKind::Borrow => "Borrow request",
            RequestKind::Import => "Import request",
        }
    }
}

/// A workflow record listed under one of the request roots
pub trait RequestRecord: DeserializeOwned + Serialize + Send + 'static {
    const KIND: RequestKind;
    /// Payload accepted when a user files a new request
    type Create: DeserializeOwned + Serialize + Send + Sync + 'static;

    fn status(&self) -> RequestStatus;
    fn requester(&self) -> &Requester;
}

impl RequestRecord for BorrowRequest {
    const KIND: RequestKind = RequestKind::Borrow;
    type Create = CreateBorrowRequest;

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn requester(&self) -> &Requester {
        &self.created_by
    }
}

impl RequestRecord for ImportRequest {
    const KIND: RequestKind = RequestKind::Import;
    type Create = CreateImportRequest;

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn requester(&self) -> &Requester {
        &self.created_by
    }
}

impl ApiClient {
    /// All requests visible to a manager/staff member
    pub async fn requests<R: RequestRecord>(
        &self,
        cred: &Credential,
        filter: &RequestFilter,
    ) -> ClientResult<Page<R>> {
        self.get_query(R::KIND.root(), &filter.query_pairs(), cred)
            .await
    }

    /// Requests filed by the caller
    pub async fn own_requests<R: RequestRecord>(
        &self,
        cred: &Credential,
        filter: &RequestFilter,
    ) -> ClientResult<Page<R>> {
        let path = format!("{}/own", R::KIND.root());
        self.get_query(&path, &filter.query_pairs(), cred).await
    }

    pub async fn request<R: RequestRecord>(&self, cred: &Credential, id: &str) -> ClientResult<R> {
        self.get((R::KIND.root(), id), cred).await
    }

    pub async fn create_request<R: RequestRecord>(
        &self,
        cred: &Credential,
        body: &R::Create,
    ) -> ClientResult<R> {
        self.post(R::KIND.root(), body, cred).await
    }

    pub async fn accept_request<R: RequestRecord>(
        &self,
        cred: &Credential,
        id: &str,
    ) -> ClientResult<R> {
        let path = format!("{}/accept", R::KIND.root());
        self.post((path.as_str(), id), &json!({}), cred).await
    }

    pub async fn reject_request<R: RequestRecord>(
        &self,
        cred: &Credential,
        body: &Reject,
    ) -> ClientResult<R> {
        let path = format!("{}/reject", R::KIND.root());
        self.post(path.as_str(), body, cred).await
    }

    pub async fn cancel_request<R: RequestRecord>(
        &self,
        cred: &Credential,
        id: &str,
    ) -> ClientResult<R> {
        let path = format!("{}/cancel", R::KIND.root());
        self.post((path.as_str(), id), &json!({}), cred).await
    }

    /// Confirm an approved request by the QR code scanned at the counter
    pub async fn verify_request<R: RequestRecord>(
        &self,
        cred: &Credential,
        body: &VerifyRequest,
    ) -> ClientResult<R> {
        let path = format!("{}/verify", R::KIND.root());
        self.post(path.as_str(), body, cred).await
    }

    pub async fn request_analysis(
        &self,
        cred: &Credential,
        kind: RequestKind,
    ) -> ClientResult<Vec<AnalysisData>> {
        let path = format!("{}/analysis", kind.root());
        self.get(path.as_str(), cred).await
    }
}

use super::{ApiClient, ClientResult, Credential};
use crate::model::{
    BarcodeResponse, ConfirmDocument, Document, DocumentDetail, MoveDocument, VerifyRequest,
};
use crate::pagination::Page;

impl ApiClient {
    pub async fn document(&self, cred: &Credential, id: &str) -> ClientResult<DocumentDetail> {
        self.get(("/documents", id), cred).await
    }

    pub async fn document_barcode(
        &self,
        cred: &Credential,
        id: &str,
    ) -> ClientResult<BarcodeResponse> {
        self.get(("/documents/barcode", id), cred).await
    }

    /// Search by document name
    pub async fn find_documents(&self, cred: &Credential, name: &str) -> ClientResult<Page<Document>> {
        self.get_query("/documents/", &[("name", name)], cred).await
    }

    /// Documents waiting for staff to shelve them, `page` is 0-based
    pub async fn pending_documents(
        &self,
        cred: &Credential,
        page: u32,
        size: usize,
    ) -> ClientResult<Page<DocumentDetail>> {
        self.get_query(
            "/documents/pending",
            &[("page", page.to_string()), ("size", size.to_string())],
            cred,
        )
        .await
    }

    /// Confirm a pending document against the scanned location QR code
    pub async fn confirm_document(
        &self,
        cred: &Credential,
        body: &ConfirmDocument,
    ) -> ClientResult<Document> {
        self.post("/documents/confirm", body, cred).await
    }

    /// Check a borrowed document back in by its scanned QR code
    pub async fn return_document(
        &self,
        cred: &Credential,
        body: &VerifyRequest,
    ) -> ClientResult<Document> {
        self.post("/documents/return", body, cred).await
    }

    pub async fn move_document(
        &self,
        cred: &Credential,
        body: &MoveDocument,
    ) -> ClientResult<Document> {
        self.put("/documents/move", body, cred).await
    }

    /// Whether a scanned PDF is attached to the document
    pub async fn has_media(&self, cred: &Credential, document_id: &str) -> ClientResult<bool> {
        self.get(("/media/check", document_id), cred).await
    }
}

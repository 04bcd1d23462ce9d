use crate::app::domain::document::{Document, DocumentId};

/// Ordered collection of open documents plus the active one.
///
/// Tab order is insertion order. The manager itself allows being empty;
/// the session layer refills it so that a document is always open.
pub struct TabManager {
    documents: Vec<Document>,
    active_id: Option<DocumentId>,
    next_id: u64,
    untitled_counter: u32,
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            active_id: None,
            next_id: 0,
            untitled_counter: 0,
        }
    }

    /// Hand out the next id. Ids are never reused.
    pub fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add_untitled(&mut self) -> DocumentId {
        self.untitled_counter += 1;
        let id = self.next_document_id();
        let doc = Document::new_untitled(id, self.untitled_counter);
        self.push(doc)
    }

    /// Append an already constructed document and activate it.
    pub fn push(&mut self, doc: Document) -> DocumentId {
        let id = doc.id;
        self.documents.push(doc);
        self.active_id = Some(id);
        id
    }

    pub fn active_doc(&self) -> Option<&Document> {
        let active_id = self.active_id?;
        self.documents.iter().find(|d| d.id == active_id)
    }

    pub fn active_doc_mut(&mut self) -> Option<&mut Document> {
        let active_id = self.active_id?;
        self.documents.iter_mut().find(|d| d.id == active_id)
    }

    pub fn set_active(&mut self, id: DocumentId) -> bool {
        if self.documents.iter().any(|d| d.id == id) {
            self.active_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Remove a document by id. If it was active, the document now at the
    /// same index becomes active, or the previous one if it was last.
    pub fn remove(&mut self, id: DocumentId) -> Option<Document> {
        let idx = self.documents.iter().position(|d| d.id == id)?;
        let doc = self.documents.remove(idx);

        if self.active_id == Some(id) {
            self.active_id = if self.documents.is_empty() {
                None
            } else {
                let new_idx = idx.min(self.documents.len() - 1);
                Some(self.documents[new_idx].id)
            };
        }

        Some(doc)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active_id
    }

    pub fn active_index(&self) -> Option<usize> {
        let active_id = self.active_id?;
        self.documents.iter().position(|d| d.id == active_id)
    }

    pub fn doc_by_id(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn doc_by_id_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.id == id)
    }

    /// Get the next document id (for tab cycling)
    pub fn next_doc_id(&self) -> Option<DocumentId> {
        let idx = self.active_index()?;
        let next_idx = (idx + 1) % self.documents.len();
        Some(self.documents[next_idx].id)
    }

    /// Get the previous document id (for tab cycling)
    pub fn prev_doc_id(&self) -> Option<DocumentId> {
        let idx = self.active_index()?;
        let prev_idx = if idx == 0 {
            self.documents.len() - 1
        } else {
            idx - 1
        };
        Some(self.documents[prev_idx].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with(n: usize) -> TabManager {
        let mut tm = TabManager::new();
        for _ in 0..n {
            tm.add_untitled();
        }
        tm
    }

    #[test]
    fn test_ids_are_sequential_and_last_is_active() {
        let tm = manager_with(3);
        let ids: Vec<_> = tm.documents().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![DocumentId(0), DocumentId(1), DocumentId(2)]);
        assert_eq!(tm.active_id(), Some(DocumentId(2)));
        assert_eq!(tm.documents()[1].display_name, "Untitled 2");
    }

    #[test]
    fn test_remove_active_middle_activates_same_index() {
        let mut tm = manager_with(3);
        tm.set_active(DocumentId(1));
        tm.remove(DocumentId(1));
        assert_eq!(tm.active_id(), Some(DocumentId(2)));
        assert_eq!(tm.active_index(), Some(1));
    }

    #[test]
    fn test_remove_active_last_activates_previous() {
        let mut tm = manager_with(3);
        tm.remove(DocumentId(2));
        assert_eq!(tm.active_id(), Some(DocumentId(1)));
    }

    #[test]
    fn test_remove_inactive_keeps_active() {
        let mut tm = manager_with(3);
        tm.remove(DocumentId(0));
        assert_eq!(tm.active_id(), Some(DocumentId(2)));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut tm = manager_with(2);
        assert!(tm.remove(DocumentId(42)).is_none());
        assert_eq!(tm.count(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut tm = manager_with(2);
        tm.remove(DocumentId(1));
        assert_eq!(tm.add_untitled(), DocumentId(2));
    }

    #[test]
    fn test_remove_last_leaves_no_active() {
        let mut tm = manager_with(1);
        tm.remove(DocumentId(0));
        assert_eq!(tm.active_id(), None);
        assert!(tm.active_doc().is_none());
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut tm = manager_with(3);
        assert_eq!(tm.next_doc_id(), Some(DocumentId(0)));
        tm.set_active(DocumentId(0));
        assert_eq!(tm.prev_doc_id(), Some(DocumentId(2)));
        assert_eq!(tm.next_doc_id(), Some(DocumentId(1)));
    }

    #[test]
    fn test_set_active_unknown_is_rejected() {
        let mut tm = manager_with(1);
        assert!(!tm.set_active(DocumentId(9)));
        assert_eq!(tm.active_id(), Some(DocumentId(0)));
    }
}

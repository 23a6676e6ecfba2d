//! In-memory [`RecordApi`] used by state-machine tests.

use std::cell::{Cell, RefCell};

use records::{DeleteOutcome, Record, RecordFields, RecordId};

use super::api::{ApiError, RecordApi};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Create,
    Update(RecordId),
    Delete(RecordId),
}

pub struct FakeApi<F> {
    records: RefCell<Vec<Record<F>>>,
    calls: RefCell<Vec<Call>>,
    pending_failure: RefCell<Option<ApiError>>,
    declined: RefCell<Vec<RecordId>>,
    next_id: Cell<u32>,
}

impl<F: RecordFields> FakeApi<F> {
    pub fn new(records: Vec<Record<F>>) -> Self {
        Self {
            records: RefCell::new(records),
            calls: RefCell::new(Vec::new()),
            pending_failure: RefCell::new(None),
            declined: RefCell::new(Vec::new()),
            next_id: Cell::new(100),
        }
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: ApiError) {
        *self.pending_failure.borrow_mut() = Some(err);
    }

    /// Answer `success: false` when `id` is deleted.
    pub fn decline(&self, id: &str) {
        self.declined.borrow_mut().push(RecordId::from(id));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn records(&self) -> Vec<Record<F>> {
        self.records.borrow().clone()
    }

    fn enter(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.pending_failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<F: RecordFields> RecordApi<F> for FakeApi<F> {
    async fn list(&self) -> Result<Vec<Record<F>>, ApiError> {
        self.enter(Call::List)?;
        Ok(self.records())
    }

    async fn create(&self, fields: &F) -> Result<Record<F>, ApiError> {
        self.enter(Call::Create)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let record = Record::new(id.to_string(), fields.clone());
        self.records.borrow_mut().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &RecordId, fields: &F) -> Result<Record<F>, ApiError> {
        self.enter(Call::Update(id.clone()))?;
        let mut records = self.records.borrow_mut();
        let Some(record) = records.iter_mut().find(|r| &r.id == id) else {
            return Err(ApiError::Status { status: 404, message: "record not found".to_owned() });
        };
        record.fields = fields.clone();
        Ok(record.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<DeleteOutcome, ApiError> {
        self.enter(Call::Delete(id.clone()))?;
        if self.declined.borrow().contains(id) {
            return Ok(DeleteOutcome::Declined);
        }
        self.records.borrow_mut().retain(|r| &r.id != id);
        Ok(DeleteOutcome::Deleted)
    }
}

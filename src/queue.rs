use crate::error::AppError;
use crate::ticket::TicketRecord;

pub const QUEUE_CAPACITY: usize = 10;

/// Bounded FIFO of ticket records. `front` is the next slot to read,
/// `rear` the next slot to write; both wrap around the backing array.
pub struct TicketQueue {
    front: usize,
    rear: usize,
    len: usize,
    slots: [Option<TicketRecord>; QUEUE_CAPACITY],
}

impl TicketQueue {
    pub fn new() -> Self {
        return TicketQueue {
            front: 0,
            rear: 0,
            len: 0,
            slots: std::array::from_fn(|_| None),
        };
    }

    pub fn enqueue(&mut self, record: TicketRecord) -> Result<(), AppError> {
        if self.is_full() {
            return Err(AppError::queue_full(&record.to_string()));
        }
        self.slots[self.rear] = Some(record);
        self.rear = (self.rear + 1) % QUEUE_CAPACITY;
        self.len += 1;
        return Ok(());
    }

    pub fn dequeue(&mut self) -> Result<TicketRecord, AppError> {
        if self.is_empty() {
            return Err(AppError::queue_empty());
        }
        let Some(record) = self.slots[self.front].take() else {
            return Err(AppError::queue_empty());
        };
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        return Ok(record);
    }

    pub fn peek(&self) -> Option<&TicketRecord> {
        self.slots[self.front].as_ref()
    }

    /// 1-indexed front-to-rear rendering, one line per present record.
    pub fn listing(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len);
        let mut pos = self.front;
        for ordinal in 1..=self.len {
            if let Some(record) = &self.slots[pos] {
                lines.push(format!("[{}]{}", ordinal, record));
            }
            pos = (pos + 1) % QUEUE_CAPACITY;
        }
        return lines;
    }

    pub fn display(&self) {
        for line in self.listing() {
            println!("{}", line);
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }
}

/// One page of a server-held collection, in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
    pub pages: Option<u64>,
    pub current_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, current_page: u32) -> Self {
        Self {
            items,
            total: None,
            pages: None,
            current_page,
        }
    }
}

use super::Pagination;

#[test]
fn it_accepts_consistent_flags() {
    let pagination = Pagination {
        page: 2,
        per_page: 12,
        total: 40,
        total_pages: 4,
        has_next: true,
        has_prev: true,
    };

    assert!(pagination.is_consistent());
}

#[test]
fn it_rejects_has_next_on_last_page() {
    let pagination = Pagination {
        page: 4,
        per_page: 12,
        total: 40,
        total_pages: 4,
        has_next: true,
        has_prev: true,
    };

    assert!(!pagination.is_consistent());
}

#[test]
fn it_rejects_has_prev_on_first_page() {
    let pagination = Pagination {
        page: 1,
        per_page: 12,
        total: 40,
        total_pages: 4,
        has_next: true,
        has_prev: true,
    };

    assert!(!pagination.is_consistent());
}

#[test]
fn it_accepts_single_page_results() {
    let pagination = Pagination {
        page: 1,
        per_page: 12,
        total: 3,
        total_pages: 1,
        has_next: false,
        has_prev: false,
    };

    assert!(pagination.is_consistent());
}

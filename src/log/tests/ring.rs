use super::*;

test_case!(test_records_come_out_oldest_first, {
    let log = verbose();
    for vpn in 0..4 {
        log_to!(log, Debug, "vpn {}", vpn);
    }

    for vpn in 0..4 {
        let expected = alloc::format!("vpn {}", vpn);
        kassert!(log.pop().unwrap().message() == expected.as_str());
    }
    kassert!(log.pop().is_none());
});

test_case!(test_full_ring_evicts_oldest, {
    let log = verbose();
    let extra = 5;
    for i in 0..LOG_RING_CAPACITY + extra {
        log_to!(log, Debug, "{}", i);
    }

    kassert!(log.len() == LOG_RING_CAPACITY);
    kassert!(log.evicted() == extra);

    let oldest = alloc::format!("{}", extra);
    kassert!(log.pop().unwrap().message() == oldest.as_str());
});

test_case!(test_ring_reusable_after_draining, {
    let log = verbose();
    for i in 0..LOG_RING_CAPACITY * 2 {
        log_to!(log, Debug, "{}", i);
    }
    while log.pop().is_some() {}

    log_to!(log, Warning, "fresh");
    kassert!(log.len() == 1);
    kassert!(log.pop().unwrap().message() == "fresh");
});

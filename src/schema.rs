table! {
    appointments (aid) {
        aid -> Unsigned<Bigint>,
        shop_id -> Char,
        service_id -> Char,
        customer_id -> Char,
        token_number -> Unsigned<Bigint>,
        booking_date -> Date,
        requested_start_time -> Datetime,
        computed_start_time -> Datetime,
        duration_minutes -> Integer,
        price -> Integer,
        status -> Char,
        created_at -> Datetime,
        updated_at -> Datetime,
    }
}

table! {
    services (service_id) {
        service_id -> Char,
        shop_id -> Char,
        service_name -> Char,
        duration_minutes -> Integer,
        price -> Integer,
    }
}

table! {
    shops (shop_id) {
        shop_id -> Char,
        shop_name -> Char,
        address -> Varchar,
    }
}

table! {
    token_counters (shop_id, booking_date) {
        shop_id -> Char,
        booking_date -> Date,
        next_token -> Unsigned<Bigint>,
    }
}

allow_tables_to_appear_in_same_query!(
    appointments,
    services,
    shops,
    token_counters,
);

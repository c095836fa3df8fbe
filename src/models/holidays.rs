//! Built-in Indonesian holiday table.
//!
//! Lunar holidays (Idul Fitri, Idul Adha, ...) move every year, so the
//! table only covers years with a published government decree.
//! Later years are added through [`HolidayTable::with_year`].

use chrono::NaiveDate;

use super::{Holiday, HolidayTable};

type Entry = (u32, u32, &'static str);

const Y2024: &[Entry] = &[
    (1, 1, "Tahun Baru Masehi"),
    (2, 10, "Tahun Baru Imlek 2575 Kongzili"),
    (3, 11, "Hari Raya Nyepi Tahun Baru Saka 1946"),
    (3, 29, "Wafat Isa Almasih"),
    (4, 10, "Hari Raya Idul Fitri 1445 Hijriah"),
    (4, 11, "Hari Raya Idul Fitri 1445 Hijriah"),
    (5, 1, "Hari Buruh Internasional"),
    (5, 9, "Kenaikan Isa Almasih"),
    (5, 23, "Hari Raya Waisak 2568"),
    (6, 1, "Hari Lahir Pancasila"),
    (6, 17, "Hari Raya Idul Adha 1445 Hijriah"),
    (7, 7, "Tahun Baru Islam 1446 Hijriah"),
    (8, 17, "Hari Kemerdekaan Republik Indonesia"),
    (9, 16, "Maulid Nabi Muhammad SAW"),
    (12, 25, "Hari Raya Natal"),
];

const Y2025: &[Entry] = &[
    (1, 1, "Tahun Baru Masehi"),
    (1, 29, "Tahun Baru Imlek 2576 Kongzili"),
    (3, 29, "Hari Raya Nyepi Tahun Baru Saka 1947"),
    (3, 30, "Hari Raya Idul Fitri 1446 Hijriah"),
    (3, 31, "Hari Raya Idul Fitri 1446 Hijriah"),
    (4, 18, "Wafat Isa Almasih"),
    (5, 1, "Hari Buruh Internasional"),
    (5, 12, "Hari Raya Waisak 2569 BE"),
    (5, 29, "Kenaikan Yesus Kristus"),
    (6, 1, "Hari Lahir Pancasila"),
    (6, 6, "Hari Raya Idul Adha 1446 Hijriah"),
    (6, 26, "Tahun Baru Islam 1447 Hijriah"),
    (8, 17, "Hari Kemerdekaan Republik Indonesia"),
    (9, 5, "Maulid Nabi Muhammad SAW"),
    (12, 25, "Hari Raya Natal"),
    // Cuti bersama (collective leave)
    (1, 2, "Cuti Bersama Tahun Baru Masehi"),
    (1, 30, "Cuti Bersama Tahun Baru Imlek"),
    (1, 31, "Cuti Bersama Tahun Baru Imlek"),
    (3, 28, "Cuti Bersama Hari Raya Nyepi"),
    (4, 1, "Cuti Bersama Hari Raya Idul Fitri"),
    (4, 2, "Cuti Bersama Hari Raya Idul Fitri"),
    (4, 3, "Cuti Bersama Hari Raya Idul Fitri"),
    (4, 4, "Cuti Bersama Hari Raya Idul Fitri"),
    (5, 13, "Cuti Bersama Hari Raya Waisak"),
    (5, 30, "Cuti Bersama Kenaikan Yesus Kristus"),
    (6, 5, "Cuti Bersama Hari Raya Idul Adha"),
    (8, 18, "Cuti Bersama Hari Kemerdekaan RI"),
    (12, 24, "Cuti Bersama Hari Raya Natal"),
    (12, 26, "Cuti Bersama Hari Raya Natal"),
];

const Y2026: &[Entry] = &[
    (1, 1, "Tahun Baru Masehi"),
    (2, 17, "Tahun Baru Imlek 2577 Kongzili"),
    (3, 19, "Hari Raya Idul Fitri 1447 Hijriah"),
    (3, 20, "Hari Raya Idul Fitri 1447 Hijriah"),
    (3, 21, "Hari Raya Nyepi Tahun Baru Saka 1948"),
    (4, 3, "Wafat Isa Almasih"),
    (5, 1, "Hari Buruh Internasional"),
    (5, 14, "Kenaikan Isa Almasih"),
    (5, 26, "Hari Raya Idul Adha 1447 Hijriah"),
    (6, 1, "Hari Lahir Pancasila"),
    (6, 2, "Hari Raya Waisak 2570"),
    (6, 16, "Tahun Baru Islam 1448 Hijriah"),
    (8, 17, "Hari Kemerdekaan Republik Indonesia"),
    (8, 25, "Maulid Nabi Muhammad SAW"),
    (12, 25, "Hari Raya Natal"),
];

fn entries(year: i32, list: &[Entry]) -> impl Iterator<Item = Holiday> + '_ {
    list.iter().filter_map(move |&(month, day, name)| {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Holiday::new(date, name))
    })
}

pub(super) fn indonesia() -> HolidayTable {
    HolidayTable::new()
        .with_year(2024, entries(2024, Y2024))
        .with_year(2025, entries(2025, Y2025))
        .with_year(2026, entries(2026, Y2026))
}

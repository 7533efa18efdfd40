use chrono::NaiveDate;
use workload_tool::{
    CompanyCalendar, CompanyHoliday, HolidayType, PeriodType, Task, TaskPeriod, UserSchedule,
    WbsAssignee, WorkloadCalculation, assignee_workloads,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn yotei_task(id: &str, start: NaiveDate, end: NaiveDate, hours: f64) -> Task {
    Task::new(id, format!("D1-{id}"), format!("Task {id}"))
        .with_assignee("a1")
        .with_period(TaskPeriod::new(PeriodType::Yotei, start, end, hours))
}

/// Corpus scenario: rate 0.8, standard 7.5h, one 40h task over Jan 15-19,
/// no holidays, no schedules. Every day carries 6.0h of capacity, the
/// period pool is 30h, so each day receives 40 x (6/30) = 8.0h.
#[test]
fn proportional_allocation_uniform_capacity() {
    let calendar = CompanyCalendar::default();
    let assignee = WbsAssignee::new("a1", "u1", "Sato", 0.8);
    let tasks = vec![yotei_task("t1", date(2025, 1, 15), date(2025, 1, 19), 40.0)];

    let calculation = WorkloadCalculation::new(&tasks, Some(&assignee), &[], &calendar);
    let days = calculation
        .daily_allocations(date(2025, 1, 15), date(2025, 1, 19))
        .unwrap();

    assert_eq!(days.len(), 5);
    let mut total = 0.0;
    for day in &days {
        assert!(approx(day.available_hours, 6.0));
        assert_eq!(day.task_allocations.len(), 1);
        assert!(approx(day.allocated_hours(), 8.0));
        assert!(day.is_overloaded());
        total += day.allocated_hours();
    }
    // The fixed task total is fully distributed.
    assert!(approx(total, 40.0));
}

#[test]
fn allocation_follows_each_days_capacity_share() {
    let calendar = CompanyCalendar::default();
    let assignee = WbsAssignee::full_time("a1", "u1", "Sato");
    // A half-day appointment on the 16th shrinks that day's share.
    let schedules = vec![UserSchedule::new(
        "u1",
        date(2025, 1, 16),
        "Training",
        "09:00",
        "12:45",
    )];
    let tasks = vec![yotei_task("t1", date(2025, 1, 15), date(2025, 1, 16), 15.0)];

    let calculation = WorkloadCalculation::new(&tasks, Some(&assignee), &schedules, &calendar);
    let days = calculation
        .daily_allocations(date(2025, 1, 15), date(2025, 1, 16))
        .unwrap();

    // Capacities: 7.5h and 3.75h; allocations split 10h / 5h.
    assert!(approx(days[0].allocated_hours(), 10.0));
    assert!(approx(days[1].allocated_hours(), 5.0));
    assert!(approx(
        days[0].allocated_hours() + days[1].allocated_hours(),
        15.0
    ));
}

#[test]
fn allocated_hours_is_sum_of_task_allocations() {
    let calendar = CompanyCalendar::default();
    let assignee = WbsAssignee::full_time("a1", "u1", "Sato");
    let tasks = vec![
        yotei_task("t1", date(2025, 2, 3), date(2025, 2, 7), 20.0),
        yotei_task("t2", date(2025, 2, 5), date(2025, 2, 7), 9.0),
    ];

    let calculation = WorkloadCalculation::new(&tasks, Some(&assignee), &[], &calendar);
    let days = calculation
        .daily_allocations(date(2025, 2, 3), date(2025, 2, 7))
        .unwrap();

    for day in &days {
        let sum: f64 = day
            .task_allocations
            .iter()
            .map(|allocation| allocation.allocated_hours)
            .sum();
        assert!(approx(day.allocated_hours(), sum));
        assert_eq!(day.is_overloaded(), day.allocated_hours() > day.available_hours);
    }
    // Overlap days carry both tasks.
    assert_eq!(days[0].task_allocations.len(), 1);
    assert_eq!(days[2].task_allocations.len(), 2);
}

#[test]
fn holidays_receive_no_allocation_and_shift_the_spread() {
    let mut calendar = CompanyCalendar::default();
    calendar.add_holiday(CompanyHoliday::new(
        date(2025, 1, 16),
        "Founding Day",
        HolidayType::Company,
    ));
    let assignee = WbsAssignee::full_time("a1", "u1", "Sato");
    let tasks = vec![yotei_task("t1", date(2025, 1, 15), date(2025, 1, 17), 15.0)];

    let calculation = WorkloadCalculation::new(&tasks, Some(&assignee), &[], &calendar);
    let days = calculation
        .daily_allocations(date(2025, 1, 15), date(2025, 1, 17))
        .unwrap();

    assert!(days[1].is_company_holiday);
    assert_eq!(days[1].available_hours, 0.0);
    assert!(days[1].task_allocations.is_empty());
    // The two open days absorb the full 15h.
    assert!(approx(days[0].allocated_hours(), 7.5));
    assert!(approx(days[2].allocated_hours(), 7.5));
}

#[test]
fn task_without_yotei_period_contributes_nothing() {
    let calendar = CompanyCalendar::default();
    let assignee = WbsAssignee::full_time("a1", "u1", "Sato");
    let tasks = vec![
        Task::new("t1", "D1-t1", "Baseline only")
            .with_assignee("a1")
            .with_period(TaskPeriod::new(
                PeriodType::Kijun,
                date(2025, 1, 15),
                date(2025, 1, 17),
                20.0,
            )),
    ];

    let calculation = WorkloadCalculation::new(&tasks, Some(&assignee), &[], &calendar);
    let days = calculation
        .daily_allocations(date(2025, 1, 15), date(2025, 1, 17))
        .unwrap();

    assert!(days.iter().all(|day| day.task_allocations.is_empty()));
}

#[test]
fn zero_capacity_period_is_skipped_not_divided() {
    let mut calendar = CompanyCalendar::default();
    calendar.add_holidays(vec![
        CompanyHoliday::new(date(2025, 1, 15), "Closure", HolidayType::Company),
        CompanyHoliday::new(date(2025, 1, 16), "Closure", HolidayType::Company),
    ]);
    let assignee = WbsAssignee::full_time("a1", "u1", "Sato");
    let tasks = vec![yotei_task("t1", date(2025, 1, 15), date(2025, 1, 16), 10.0)];

    let calculation = WorkloadCalculation::new(&tasks, Some(&assignee), &[], &calendar);
    let days = calculation
        .daily_allocations(date(2025, 1, 15), date(2025, 1, 16))
        .unwrap();

    assert!(days.iter().all(|day| day.task_allocations.is_empty()));
    assert!(days.iter().all(|day| !day.is_overloaded()));
}

#[test]
fn allocation_pool_spans_full_period_beyond_requested_range() {
    let calendar = CompanyCalendar::default();
    let assignee = WbsAssignee::full_time("a1", "u1", "Sato");
    // 4-day period at 7.5h/day = 30h pool; only 1 day is requested.
    let tasks = vec![yotei_task("t1", date(2025, 1, 14), date(2025, 1, 17), 30.0)];

    let calculation = WorkloadCalculation::new(&tasks, Some(&assignee), &[], &calendar);
    let days = calculation
        .daily_allocations(date(2025, 1, 15), date(2025, 1, 15))
        .unwrap();

    assert_eq!(days.len(), 1);
    // The day gets its period share (7.5/30 of 30h), not the whole task.
    assert!(approx(days[0].allocated_hours(), 7.5));
}

#[test]
fn weekend_flag_is_metadata_only() {
    let calendar = CompanyCalendar::default();
    let assignee = WbsAssignee::full_time("a1", "u1", "Sato");
    let tasks = vec![yotei_task("t1", date(2025, 1, 17), date(2025, 1, 19), 15.0)];

    let calculation = WorkloadCalculation::new(&tasks, Some(&assignee), &[], &calendar);
    let days = calculation
        .daily_allocations(date(2025, 1, 17), date(2025, 1, 19))
        .unwrap();

    // Fri / Sat / Sun: flags differ, availability does not.
    assert!(!days[0].is_weekend);
    assert!(days[1].is_weekend);
    assert!(days[2].is_weekend);
    assert!(days.iter().all(|day| approx(day.available_hours, 7.5)));
}

#[test]
fn schedule_summaries_surface_the_days_appointments() {
    let calendar = CompanyCalendar::default();
    let assignee = WbsAssignee::full_time("a1", "u1", "Sato");
    let schedules = vec![
        UserSchedule::new("u1", date(2025, 1, 15), "Standup", "09:00", "09:30"),
        UserSchedule::new("u1", date(2025, 1, 15), "Review", "14:00", "15:00"),
    ];

    let calculation = WorkloadCalculation::new(&[], Some(&assignee), &schedules, &calendar);
    let days = calculation
        .daily_allocations(date(2025, 1, 15), date(2025, 1, 15))
        .unwrap();

    assert_eq!(days[0].schedule_summaries.len(), 2);
    assert_eq!(days[0].schedule_summaries[0].title, "Standup");
    assert!(approx(days[0].schedule_summaries[1].duration_hours, 1.0));
}

#[test]
fn calculation_is_idempotent() {
    let mut calendar = CompanyCalendar::default();
    calendar.add_holiday(CompanyHoliday::new(
        date(2025, 1, 16),
        "Founding Day",
        HolidayType::Company,
    ));
    let assignee = WbsAssignee::new("a1", "u1", "Sato", 0.8);
    let schedules = vec![UserSchedule::new(
        "u1",
        date(2025, 1, 17),
        "Dentist",
        "10:00",
        "11:30",
    )];
    let tasks = vec![yotei_task("t1", date(2025, 1, 15), date(2025, 1, 19), 40.0)];

    let calculation = WorkloadCalculation::new(&tasks, Some(&assignee), &schedules, &calendar);
    let first = calculation
        .daily_allocations(date(2025, 1, 15), date(2025, 1, 19))
        .unwrap();
    let second = calculation
        .daily_allocations(date(2025, 1, 15), date(2025, 1, 19))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn assignees_are_computed_independently_and_in_input_order() {
    let calendar = CompanyCalendar::default();
    let assignees = vec![
        WbsAssignee::new("a1", "u1", "Sato", 0.8),
        WbsAssignee::full_time("a2", "u2", "Suzuki"),
    ];
    // a1 is overloaded; a2 is not. a2's PTO must not affect a1.
    let tasks = vec![
        yotei_task("t1", date(2025, 1, 15), date(2025, 1, 19), 40.0),
        Task::new("t2", "D1-t2", "Task t2")
            .with_assignee("a2")
            .with_period(TaskPeriod::new(
                PeriodType::Yotei,
                date(2025, 1, 15),
                date(2025, 1, 19),
                10.0,
            )),
    ];
    let schedules = vec![UserSchedule::new(
        "u2",
        date(2025, 1, 15),
        "PTO",
        "00:00",
        "24:00",
    )];

    let workloads = assignee_workloads(
        &tasks,
        &assignees,
        &schedules,
        &calendar,
        date(2025, 1, 15),
        date(2025, 1, 19),
    )
    .unwrap();

    assert_eq!(workloads.len(), 2);
    assert_eq!(workloads[0].assignee_id, "a1");
    assert_eq!(workloads[1].assignee_id, "a2");

    // a1: every day allocated 8.0 against 6.0 available.
    let overloaded: Vec<NaiveDate> = workloads[0].overloaded_days();
    assert_eq!(overloaded.len(), 5);
    assert!(approx(workloads[0].total_allocated_hours(), 40.0));

    // a2: 10h over four open days (PTO zeroes the 15th), never overloaded.
    assert!(workloads[1].overloaded_days().is_empty());
    assert_eq!(workloads[1].daily_allocations[0].available_hours, 0.0);
    assert!(approx(workloads[1].total_allocated_hours(), 10.0));
}

#[test]
fn assignee_with_no_tasks_still_gets_a_workload() {
    let calendar = CompanyCalendar::default();
    let assignees = vec![WbsAssignee::full_time("a9", "u9", "Idle")];

    let workloads = assignee_workloads(
        &[],
        &assignees,
        &[],
        &calendar,
        date(2025, 1, 15),
        date(2025, 1, 17),
    )
    .unwrap();

    assert_eq!(workloads.len(), 1);
    assert_eq!(workloads[0].daily_allocations.len(), 3);
    assert_eq!(workloads[0].total_allocated_hours(), 0.0);
    assert!(approx(workloads[0].total_available_hours(), 22.5));
}

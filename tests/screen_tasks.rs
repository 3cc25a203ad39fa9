use std::sync::mpsc;
use std::time::Duration;

use course_feedback::ui::events::AppEvent;
use course_feedback::ui::screen::ScreenMessage;
use course_feedback::ui::summary::SummaryIntent;
use course_feedback::ui::tasks::ScreenTasks;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

fn courses_message() -> ScreenMessage {
    ScreenMessage::Summary(SummaryIntent::CoursesLoaded(vec!["SENG306".into()]))
}

#[test]
fn finished_task_posts_tagged_result() {
    let rt = runtime();
    let (tx, rx) = mpsc::channel();
    let mut tasks = ScreenTasks::new(7, rt.handle().clone(), tx);

    tasks.spawn("courses", async { courses_message() });

    match rx.recv_timeout(Duration::from_secs(2)) {
        Ok(AppEvent::Screen {
            generation,
            message: ScreenMessage::Summary(SummaryIntent::CoursesLoaded(courses)),
        }) => {
            assert_eq!(generation, 7);
            assert_eq!(courses, vec!["SENG306".to_string()]);
        }
        _ => panic!("expected a tagged courses result"),
    }
}

#[test]
fn dropping_scope_aborts_pending_tasks() {
    let rt = runtime();
    let (tx, rx) = mpsc::channel();
    let mut tasks = ScreenTasks::new(1, rt.handle().clone(), tx);

    tasks.spawn("slow", async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        courses_message()
    });
    assert_eq!(tasks.in_flight(), 1);

    drop(tasks);

    // The only sender lived in the scope and its task
    assert!(matches!(
        rx.recv_timeout(Duration::from_secs(1)),
        Err(mpsc::RecvTimeoutError::Disconnected)
    ));
}

#[test]
fn cancel_all_keeps_scope_usable() {
    let rt = runtime();
    let (tx, rx) = mpsc::channel();
    let mut tasks = ScreenTasks::new(2, rt.handle().clone(), tx);

    tasks.spawn("slow", async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        courses_message()
    });
    tasks.cancel_all();
    assert_eq!(tasks.in_flight(), 0);

    tasks.spawn("fast", async { courses_message() });
    let event = rx.recv_timeout(Duration::from_secs(2)).expect("fast result");
    assert!(matches!(event, AppEvent::Screen { generation: 2, .. }));
}

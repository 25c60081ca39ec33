use keepsake_core::model::content::{CLOSING, POEM};
use keepsake_core::{Screen, ScreenAction};
use services::FALLBACK_WISH;

use super::test_harness::{ViewHarness, finish_current, run_all_timers, session_at};

#[tokio::test(flavor = "current_thread")]
async fn login_hides_the_music_player() {
    let harness = ViewHarness::at(Screen::Login);
    let html = harness.html();

    assert!(html.contains("Welcome Back"));
    assert!(html.contains("Access Card"));
    assert!(!html.contains("music-toggle"));
}

#[tokio::test(flavor = "current_thread")]
async fn card_keeps_next_hidden_during_the_celebration() {
    let harness = ViewHarness::at(Screen::Card);
    let html = harness.html();

    assert!(html.contains("Celebrate!"));
    assert!(html.contains("Happy Birthday!"));
    assert!(!html.contains("nav-next"));
    assert!(html.contains("music-toggle"));
    assert!(html.contains("Selamat Ulang Tahun"));
}

#[tokio::test(flavor = "current_thread")]
async fn finished_card_shows_the_banner_and_next() {
    let mut session = session_at(Screen::Card);
    run_all_timers(&mut session);
    let mut harness = ViewHarness::with_session(session);
    let html = harness.html();

    assert!(html.contains("Surprise I love you baby"));
    assert!(html.contains("Next: Open Message"));

    assert_eq!(harness.advance(), Some(Screen::Note));
    let html = harness.html();
    assert!(html.contains("Read the poem"));
    assert!(html.contains("Wiseman"));
}

#[tokio::test(flavor = "current_thread")]
async fn note_opens_on_the_letter_then_the_poem() {
    let mut harness = ViewHarness::at(Screen::Note);
    assert!(harness.html().contains("Happy birthday to my most beautiful girl"));
    assert!(!harness.html().contains(POEM.title));

    assert!(harness.apply(ScreenAction::ShowPoem));
    let html = harness.html();
    assert!(html.contains(POEM.title));
    assert!(!html.contains("Next: Things I Love"));
}

#[tokio::test(flavor = "current_thread")]
async fn appreciation_counts_viewed_items() {
    let mut harness = ViewHarness::at(Screen::Appreciation);
    assert!(harness.html().contains("0 / 6"));
    assert!(!harness.html().contains("one-last-thing"));

    harness.apply(ScreenAction::ToggleAppreciation("eyes".to_string()));
    let html = harness.html();
    assert!(html.contains("1 / 6"));
    assert!(html.contains("They feel honest."));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_shows_feedback_for_each_answer() {
    let mut harness = ViewHarness::at(Screen::Quiz);
    assert!(harness.html().contains("Question 1 / 5"));
    assert!(harness.html().contains(r#"aria-label="Pop Quiz""#));
    assert!(!harness.html().contains("quiz-next"));

    harness.apply(ScreenAction::AnswerQuiz(1));
    assert!(harness.html().contains("Are you blind or what? Try again."));

    harness.apply(ScreenAction::AnswerQuiz(0));
    let html = harness.html();
    assert!(html.contains("Correct! You know your stuff!"));
    assert!(html.contains("Next Question"));
}

#[tokio::test(flavor = "current_thread")]
async fn completed_quiz_unlocks_the_gallery() {
    let mut session = session_at(Screen::Quiz);
    finish_current(&mut session);
    let harness = ViewHarness::with_session(session);
    let html = harness.html();

    assert!(html.contains("Quiz Complete!"));
    assert!(html.contains("Next: Gallery"));
}

#[tokio::test(flavor = "current_thread")]
async fn gallery_renders_keywords_and_rows() {
    let harness = ViewHarness::at(Screen::Gallery);
    let html = harness.html();

    assert!(html.contains("Beautiful"));
    assert!(html.contains("gallery-rows"));
    assert!(html.contains("Next: One More Thing"));
    assert!(html.contains("Love Me Not"));
}

#[tokio::test(flavor = "current_thread")]
async fn closing_reveals_the_ending_once() {
    let mut harness = ViewHarness::at(Screen::Closing);
    let html = harness.html();
    assert!(html.contains(CLOSING.reveal_label));
    assert!(html.contains("open-wish"));
    assert!(!html.contains("nav-next"));

    assert!(harness.apply(ScreenAction::RevealEnd));
    let html = harness.html();
    assert!(!html.contains("reveal-end"));
    assert!(html.contains("There is no end."));
}

async fn settle_until(harness: &mut ViewHarness, needle: &str) -> String {
    for _ in 0..5 {
        let html = harness.html();
        if html.contains(needle) {
            return html;
        }
        harness.drive_async().await;
    }
    harness.html()
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn failed_login_shows_the_error_and_keeps_the_gate() {
    let mut harness = ViewHarness::at(Screen::Login);
    harness.submit_login("x@y.com", "wrong");

    let html = settle_until(&mut harness, "Incorrect email or password").await;
    assert!(html.contains("Incorrect email or password. Please try again."));
    assert!(html.contains("login-error"));
    assert!(html.contains("Welcome Back"));
    assert_eq!(harness.screen(), Screen::Login);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn matching_login_opens_the_card() {
    let mut harness = ViewHarness::at(Screen::Login);
    harness.submit_login("Rafif.Faisal@pwc.com", "010202Feb");

    let html = settle_until(&mut harness, "Celebrate!").await;
    assert!(html.contains("Celebrate!"));
    assert!(!html.contains("login-error"));
    assert_eq!(harness.screen(), Screen::Card);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn wish_panel_falls_back_without_a_generator() {
    let mut harness = ViewHarness::at(Screen::Closing);
    assert!(!harness.html().contains("AI Wish Writer"));

    harness.open_wish_panel();
    let html = harness.html();
    assert!(html.contains("AI Wish Writer"));
    assert!(html.contains("Heartfelt"));
    assert!(html.contains("Colleague"));
    assert!(!html.contains("wish-copy"));

    harness.generate_wish("Alex");
    let html = settle_until(&mut harness, FALLBACK_WISH).await;
    assert!(html.contains(FALLBACK_WISH));
    assert!(html.contains("wish-copy"));
}

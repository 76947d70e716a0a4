//! Integration tests for dashboard aggregation.

use playlog_core::game_status::GameStatus;
use playlog_db::models::game::CreateGame;
use playlog_db::models::note::CreateNote;
use playlog_db::models::solution::CreateSolution;
use playlog_db::repositories::{DashboardRepo, GameRepo, NoteRepo, SolutionRepo};
use sqlx::PgPool;

async fn seed_game(pool: &PgPool, status: GameStatus) -> i64 {
    let input = CreateGame {
        name: format!("{status} game"),
        description: None,
        image_url: None,
        status: Some(status),
    };
    GameRepo::create(pool, &input).await.unwrap().id
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_on_empty_store(pool: PgPool) {
    let stats = DashboardRepo::stats(&pool).await.unwrap();

    assert_eq!(stats.total_games, 0);
    assert_eq!(stats.games_by_status.total(), 0);
    assert_eq!(stats.total_notes, 0);
    assert_eq!(stats.total_solutions, 0);
    assert_eq!(stats.avg_notes_per_game, 0.0);
    assert_eq!(stats.avg_solutions_per_game, 0.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_counts_every_status(pool: PgPool) {
    let backlog = seed_game(&pool, GameStatus::Backlog).await;
    seed_game(&pool, GameStatus::Backlog).await;
    let playing = seed_game(&pool, GameStatus::InProgress).await;
    seed_game(&pool, GameStatus::Completed).await;

    for game_id in [backlog, backlog, playing] {
        NoteRepo::create(
            &pool,
            &CreateNote {
                game_id,
                title: "t".to_string(),
                content: "c".to_string(),
            },
        )
        .await
        .unwrap();
    }
    SolutionRepo::create(
        &pool,
        &CreateSolution {
            game_id: playing,
            problem: "p".to_string(),
            solution: "s".to_string(),
            ai_generated: true,
        },
    )
    .await
    .unwrap();

    let stats = DashboardRepo::stats(&pool).await.unwrap();

    assert_eq!(stats.total_games, 4);
    assert_eq!(stats.games_by_status.backlog, 2);
    assert_eq!(stats.games_by_status.in_progress, 1);
    assert_eq!(stats.games_by_status.completed, 1);
    assert_eq!(stats.games_by_status.abandoned, 0);
    assert_eq!(stats.total_games, stats.games_by_status.total());
    assert_eq!(stats.total_notes, 3);
    assert_eq!(stats.total_solutions, 1);
    assert_eq!(stats.avg_notes_per_game, 0.75);
    assert_eq!(stats.avg_solutions_per_game, 0.25);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_follow_status_changes_and_deletes(pool: PgPool) {
    let game_id = seed_game(&pool, GameStatus::Backlog).await;
    GameRepo::update_status(&pool, game_id, GameStatus::Abandoned)
        .await
        .unwrap();

    let stats = DashboardRepo::stats(&pool).await.unwrap();
    assert_eq!(stats.games_by_status.backlog, 0);
    assert_eq!(stats.games_by_status.abandoned, 1);

    GameRepo::delete_cascade(&pool, game_id).await.unwrap();
    let stats = DashboardRepo::stats(&pool).await.unwrap();
    assert_eq!(stats.total_games, 0);
}

use retro_snake::config::GameConfig;
use retro_snake::food::Food;
use retro_snake::game::GameState;
use retro_snake::input::Direction;
use retro_snake::snake::Position;

#[test]
fn stepwise_food_collection_wall_collision_and_restart() {
    let mut state =
        GameState::new_with_seed(GameConfig::default(), 42).expect("default config is valid");

    // Food directly ahead of the starting head at (6, 9).
    state.food = Food::at(Position { x: 7, y: 9 });

    state.tick();
    assert!(state.is_running());
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Position { x: 7, y: 9 });
    assert!(!state.snake.occupies(state.food.position));

    // Park the food out of the way and drive into the top wall.
    state.food = Food::at(Position { x: 0, y: 24 });
    state.set_direction(Direction::Up);
    for expected_y in (0..9).rev() {
        state.tick();
        assert!(state.is_running());
        assert_eq!(state.snake.head(), Position { x: 7, y: expected_y });
    }

    // The next step leaves the grid: hard reset into the game-over state.
    state.tick();
    assert!(!state.is_running());
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Position { x: 6, y: 9 });
    assert!(!state.snake.occupies(state.food.position));

    // Any valid direction restarts the run from the next tick.
    state.set_direction(Direction::Down);
    assert!(state.is_running());
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 6, y: 10 });
}

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hand_of_the_king::assets::{AssetBundle, AssetParts, Sprite};
use hand_of_the_king::render::{BoardView, Surface};
use hand_of_the_king::types::{
    Banner, Card, Player, Rgb, BOARD_HEIGHT, BOARD_WIDTH, CARD_SIZE, CELL_COUNT,
};
use hand_of_the_king::window::copy_frame;

fn assets() -> AssetBundle {
    let mut cards = HashMap::new();
    for i in 0..CELL_COUNT {
        let shade = (i * 7) as u8;
        cards.insert(
            format!("card{i}"),
            Sprite::solid(CARD_SIZE, CARD_SIZE, Rgb::new(shade, 40, 90)),
        );
    }
    AssetBundle::from_parts(AssetParts {
        cards,
        icon: Sprite::solid(256, 256, Rgb::BLACK),
        banners: [
            Sprite::solid(330, 23, Rgb::BLACK),
            Sprite::solid(140, 23, Rgb::BLACK),
            Sprite::solid(140, 23, Rgb::BLACK),
        ],
        win_texts: [
            Sprite::solid(170, 29, Rgb::WHITE),
            Sprite::solid(170, 29, Rgb::WHITE),
        ],
        win_screen: Sprite::solid(BOARD_WIDTH, BOARD_HEIGHT, Rgb::new(20, 20, 20)),
    })
}

fn bench_draw_full_board(c: &mut Criterion) {
    let assets = assets();
    let view = BoardView::default();
    let cards: Vec<Card> = (0..CELL_COUNT)
        .map(|i| Card::new(format!("card{i}"), i))
        .collect();
    let mut surface = Surface::board();

    c.bench_function("draw_board_36_cards", |b| {
        b.iter(|| {
            view.draw_board(
                &mut surface,
                &assets,
                black_box(&cards),
                Banner::Turn(Player::One),
            )
            .unwrap();
        })
    });
}

fn bench_draw_winner(c: &mut Criterion) {
    let assets = assets();
    let view = BoardView::default();
    let mut surface = Surface::board();

    c.bench_function("draw_winner", |b| {
        b.iter(|| view.draw_winner(&mut surface, &assets, black_box(Player::Two)))
    });
}

fn bench_copy_frame(c: &mut Criterion) {
    let surface = Surface::board();
    // A window a little larger than the board, as after DPI rounding.
    let (w, h) = (BOARD_WIDTH + 5, BOARD_HEIGHT + 5);
    let mut buffer = vec![0u32; (w * h) as usize];

    c.bench_function("copy_frame_padded", |b| {
        b.iter(|| copy_frame(black_box(&surface), &mut buffer, w, h))
    });
}

criterion_group!(
    benches,
    bench_draw_full_board,
    bench_draw_winner,
    bench_copy_frame
);
criterion_main!(benches);

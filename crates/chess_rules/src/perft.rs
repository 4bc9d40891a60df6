use crate::{game::GameState, types::PromotionKind};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, with
/// every promotion counted once per piece it can become.
pub fn perft(game: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if game.is_over() {
        return 0;
    }

    let side = game.active_color();
    let mut nodes = 0u64;
    for mv in game.legal_moves(side) {
        let choices: &[PromotionKind] = if game.is_promotion(mv) {
            &PromotionKind::ALL
        } else {
            &PromotionKind::ALL[..1]
        };
        if depth == 1 {
            // Bulk count at the horizon
            nodes += choices.len() as u64;
            continue;
        }
        for &promo in choices {
            let mut next = game.clone();
            if next.submit_move(mv.from, mv.to, promo).is_ok() {
                nodes += perft(&next, depth - 1);
            }
        }
    }
    nodes
}

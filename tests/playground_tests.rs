// End-to-end tests for the playground library
//
// Tests cover:
// - Reply rule cascade (safety, name, greeting, topics, fallback)
// - Math, memory, riddle and guess rounds with score accumulation
// - Chat session flow

use kidschat::models::catalog::Catalog;
use kidschat::services::chat_session::{ChatSession, WELCOME_MESSAGE};
use kidschat::services::games::guess::GuessGame;
use kidschat::services::games::math::{MathGame, MathProblem, Operator};
use kidschat::services::games::memory::{MemoryGame, MemoryPhase, MemoryRound};
use kidschat::services::games::riddle::RiddleGame;
use kidschat::services::games::{GameKind, Phase};
use kidschat::services::random::{ScriptedRandom, seeded_source};
use kidschat::services::responder::{
    ENCOURAGING_REPLIES, GREETING_REPLY, ReplyRule, ResponseSelector, SAFETY_REDIRECT_REPLY,
    Topic, Vocabulary,
};
use kidschat::services::score::ScoreTracker;

mod responder_tests {
    use super::*;

    #[test]
    fn test_denylist_beats_every_other_rule() {
        let selector = ResponseSelector::new(Vocabulary::Standard);
        let mut rng = ScriptedRandom::new([0]);
        for input in [
            "hi my name is Sam and I hate dogs",
            "this game is dumb",
            "I'm bad at school",
            "HELLO STUPID",
        ] {
            assert_eq!(selector.select_response(input, &mut rng), SAFETY_REDIRECT_REPLY);
        }
    }

    #[test]
    fn test_name_wins_over_greeting() {
        let selector = ResponseSelector::default();
        let mut rng = ScriptedRandom::new([0]);
        let reply = selector.select_response("hi, my name is Sam", &mut rng);
        assert!(reply.contains("Sam"));
        assert_ne!(reply, GREETING_REPLY);
    }

    #[test]
    fn test_name_trigger_without_token_uses_friend() {
        let selector = ResponseSelector::default();
        assert_eq!(
            selector.classify("call me"),
            ReplyRule::NameIntroduction("friend".to_string())
        );
    }

    #[test]
    fn test_vocabularies_differ_on_extended_words() {
        let standard = ResponseSelector::new(Vocabulary::Standard);
        let extended = ResponseSelector::new(Vocabulary::Extended);

        assert_eq!(extended.classify("my pet turtle"), ReplyRule::Topic(Topic::Animals));
        assert_eq!(standard.classify("my pet turtle"), ReplyRule::Encouragement);
        assert_eq!(extended.classify("shut up"), ReplyRule::SafetyRedirect);
    }

    #[test]
    fn test_fallback_draws_once_from_rng() {
        let selector = ResponseSelector::default();
        let mut rng = ScriptedRandom::new([3, 1]);
        assert_eq!(selector.select_response("tell me a story", &mut rng), ENCOURAGING_REPLIES[3]);
        assert_eq!(selector.select_response("tell me a story", &mut rng), ENCOURAGING_REPLIES[1]);
    }
}

mod game_tests {
    use super::*;

    #[test]
    fn test_math_end_to_end() {
        let mut game = MathGame::new();
        let mut score = ScoreTracker::new();

        game.begin(MathProblem::new(7, 3, Operator::Add));
        let grade = game.submit("10", &mut score).unwrap();
        assert!(grade.correct);
        assert_eq!(score.total(), 15);

        game.begin(MathProblem::new(7, 3, Operator::Add));
        let grade = game.submit("9", &mut score).unwrap();
        assert!(!grade.correct);
        assert!(grade.feedback.contains("10"));
        assert_eq!(score.total(), 15);
    }

    #[test]
    fn test_generated_subtraction_never_negative() {
        let mut rng = seeded_source(7);
        let mut game = MathGame::new();
        for _ in 0..2000 {
            let problem = game.next(&mut rng);
            if problem.operator == Operator::Subtract {
                assert!(problem.operand_a - problem.operand_b >= 0);
            }
        }
    }

    #[test]
    fn test_memory_end_to_end() {
        let mut game = MemoryGame::new();
        let mut score = ScoreTracker::new();
        let target = ["🐶", "🐱", "🦊"].iter().map(|s| s.to_string()).collect();
        game.begin(MemoryRound::new(target)).unwrap();
        game.reveal_complete().unwrap();

        assert_eq!(game.select("🐶", &mut score).unwrap(), None);
        assert_eq!(game.select("🐱", &mut score).unwrap(), None);
        let grade = game.select("🐰", &mut score).unwrap().unwrap();

        assert!(!grade.correct);
        assert_eq!(game.phase(), MemoryPhase::Feedback);
        assert_eq!(score.total(), 0);
    }

    #[test]
    fn test_memory_order_sensitive() {
        let mut game = MemoryGame::new();
        let mut score = ScoreTracker::new();
        game.begin(MemoryRound::new(vec!["🐱".into(), "🐶".into()])).unwrap();
        game.reveal_complete().unwrap();
        game.select("🐶", &mut score).unwrap();
        let grade = game.select("🐱", &mut score).unwrap().unwrap();
        assert!(!grade.correct);
    }

    #[test]
    fn test_riddle_and_guess_wrap() {
        let mut riddles = RiddleGame::default();
        riddles.start_at(riddles.len() - 1).unwrap();
        riddles.next();
        assert_eq!(riddles.index(), 0);

        let mut guesses = GuessGame::default();
        guesses.start_at(guesses.len() - 1).unwrap();
        guesses.next();
        assert_eq!(guesses.index(), 0);
        assert_eq!(guesses.phase(), Phase::InRound);
    }

    #[test]
    fn test_score_accumulates_across_games() {
        let catalog = Catalog::builtin();
        let mut score = ScoreTracker::new();
        let mut history = vec![score.total()];

        let mut riddles = RiddleGame::new(catalog.riddles.clone()).unwrap();
        riddles.start();
        riddles.submit("dog", &mut score).unwrap();
        history.push(score.total());

        let mut guesses = GuessGame::new(catalog.animals.clone()).unwrap();
        guesses.start();
        guesses.submit("zebra", &mut score).unwrap();
        history.push(score.total());
        guesses.next();
        guesses.submit("LION", &mut score).unwrap();
        history.push(score.total());

        assert_eq!(score.total(), GameKind::Riddle.points() + GameKind::Guess.points());
        assert!(history.windows(2).all(|w| w[1] >= w[0]));

        score.reset();
        assert_eq!(score.total(), 0);
    }
}

mod chat_session_tests {
    use super::*;

    #[test]
    fn test_conversation_flow() {
        let selector = ResponseSelector::default();
        let mut rng = ScriptedRandom::new([0]);
        let mut session = ChatSession::new();
        assert_eq!(session.last().unwrap().text, WELCOME_MESSAGE);

        session.submit("hi, my name is Sam").unwrap();
        let reply = session.respond(&selector, &mut rng).unwrap();
        assert!(reply.text.contains("Sam"));

        session.submit("I like my dog").unwrap();
        let reply = session.respond(&selector, &mut rng).unwrap();
        assert_eq!(reply.text, Topic::Animals.reply());

        assert_eq!(session.messages().len(), 5);
        assert!(session.messages().iter().filter(|m| m.is_user).count() == 2);
    }
}

use std::sync::Mutex;

use parley::builder::{
    InteractionBuilderFactory,
    InteractionDeferredBuilder,
    InteractionMessageBuilder,
};
use parley::model::prelude::*;
use parley::model::application::RespondableInteraction;

/// Hands out builders without any transport behind them.
#[derive(Default)]
struct Recorder {
    kinds: Mutex<Vec<ResponseType>>,
}

impl InteractionBuilderFactory for Recorder {
    fn interaction_message_builder(&self, kind: ResponseType) -> InteractionMessageBuilder {
        self.kinds.lock().unwrap().push(kind);
        InteractionMessageBuilder::new(kind)
    }

    fn interaction_deferred_builder(&self, kind: ResponseType) -> InteractionDeferredBuilder {
        self.kinds.lock().unwrap().push(kind);
        InteractionDeferredBuilder::new(kind)
    }
}

fn interaction() -> ModalInteraction {
    let raw = include_str!("resources/modal_submit_guild.json");
    serde_json::from_str(raw).unwrap()
}

#[test]
fn reads_submitted_values() {
    let interaction = interaction();

    assert_eq!(interaction.custom_id(), "feedback");
    assert_eq!(interaction.components().len(), 2);
    assert_eq!(interaction.value_of("subject"), Some("Rate limits"));
    assert_eq!(interaction.value_of("body"), Some("Followups are hard to get right."));

    let ids: Vec<_> = interaction.text_inputs().map(|input| input.custom_id.as_str()).collect();
    assert_eq!(ids, ["subject", "body"]);
}

#[test]
fn response_kinds() {
    let interaction = interaction();
    let recorder = Recorder::default();

    let message = interaction.build_response(&recorder).content("Thanks for the feedback!");
    let deferred = interaction.build_deferred_response(&recorder).ephemeral(true);

    assert_eq!(message.kind(), ResponseType::MessageCreate);
    assert_eq!(deferred.kind(), ResponseType::DeferredMessageCreate);
    assert_eq!(
        serde_json::to_value(&deferred).unwrap(),
        serde_json::json!({"type": 5, "data": {"flags": 64}})
    );
    assert_eq!(
        *recorder.kinds.lock().unwrap(),
        [ResponseType::MessageCreate, ResponseType::DeferredMessageCreate]
    );
}

#[test]
fn illegal_kinds_never_reach_the_factory() {
    let interaction = interaction();
    let recorder = Recorder::default();

    for kind in [
        ResponseType::Pong,
        ResponseType::DeferredMessageUpdate,
        ResponseType::MessageUpdate,
        ResponseType::Modal,
    ] {
        assert!(!InteractionType::Modal.allows(kind));
        assert!(interaction.message_builder(&recorder, kind).is_err());
    }

    assert!(recorder.kinds.lock().unwrap().is_empty());
}

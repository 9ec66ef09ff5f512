//! The classic door walk-through: a process that loops between a closed
//! state accepting {Open, Knock} and an open state accepting only {Close}.
//!
//! Run with: `cargo run --example door`

use eventide::flow::{emitting_rule, Flow};
use eventide::{event_enum, flow_state, FlowBuilder, ProcessHandle};

event_enum! {
    pub enum DoorEvent {
        Open,
        Close,
        Knock,
    }
    kinds: DoorKind
}

flow_state! {
    pub enum DoorState {
        Closed,
        Opened,
    }
}

fn get_door(answer: &str) -> Flow<DoorState, DoorEvent> {
    FlowBuilder::new()
        .initial(DoorState::Closed)
        .add_rule(emitting_rule(
            DoorState::Closed,
            DoorKind::Knock,
            DoorState::Closed,
            answer,
        ))
        .add_rule(emitting_rule(
            DoorState::Closed,
            DoorKind::Open,
            DoorState::Opened,
            "*Door opened*",
        ))
        .add_rule(emitting_rule(
            DoorState::Opened,
            DoorKind::Close,
            DoorState::Closed,
            "*Door closed*",
        ))
        .build()
        .expect("door flow is well-formed")
}

fn drain(door: &mut ProcessHandle<Flow<DoorState, DoorEvent>>) {
    if let Some(flow) = door.body_mut() {
        for line in flow.take_outputs() {
            println!("{line}");
        }
    }
}

fn main() {
    let mut door = ProcessHandle::start(get_door("Come in, it's open!"))
        .expect("door flow starts suspended");

    println!("Trying to open");
    door.deliver(DoorEvent::Open); // Closed -> Opened
    drain(&mut door);

    println!("Trying to knock");
    door.deliver(DoorEvent::Knock); // It's open; ignored.
    drain(&mut door);

    println!("Trying to close");
    door.deliver(DoorEvent::Close); // Opened -> Closed
    drain(&mut door);

    println!("Trying to knock");
    door.deliver(DoorEvent::Knock); // Answered.
    drain(&mut door);

    println!("Trying to close");
    door.deliver(DoorEvent::Close); // Closed -> Closed; ignored.
    drain(&mut door);

    println!("Deliveries: {}", door.log().records().len());
}

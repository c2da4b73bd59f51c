//! Basic walkthrough of the client API: Unix-socket delivery, TCP delivery,
//! batching, and error handling. Expects an agent listening on the default
//! endpoints; flows that cannot connect print the error and move on.

use logflux_client::{Client, ClientError, Entry, EntryType, Level, agent_running};

fn demonstrate_unix_socket() {
    println!("=== Unix socket ===");

    let mut client = match Client::unix("/tmp/logflux-agent.sock") {
        Ok(client) => client,
        Err(err) => {
            eprintln!("failed to create Unix socket client: {err}");
            return;
        }
    };

    if let Err(err) = client.connect() {
        eprintln!("failed to connect via Unix socket: {err}");
        return;
    }
    println!("connected via Unix socket");

    match client.send_log("Hello from the LogFlux Rust SDK!") {
        Ok(()) => println!("sent simple log message"),
        Err(err) => eprintln!("failed to send log: {err}"),
    }

    let mut entry = Entry::new("Application started").expect("message is non-empty");
    entry.set_level(Level::Info);
    entry.set_source("basic-example");
    entry.add_label("component", "demo");
    entry.add_label("version", "1.0.0");

    match client.send_entry(&entry) {
        Ok(()) => println!("sent structured log entry"),
        Err(err) => eprintln!("failed to send structured entry: {err}"),
    }

    client.close();
    println!("Unix socket connection closed\n");
}

fn demonstrate_tcp_connection() {
    println!("=== TCP connection ===");

    let mut client = match Client::tcp("127.0.0.1", 8080) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("failed to create TCP client: {err}");
            return;
        }
    };

    if let Err(err) = client.connect() {
        eprintln!("failed to connect via TCP: {err}");
        return;
    }
    println!("connected via TCP");

    match client.send_log("Hello from a TCP connection!") {
        Ok(()) => println!("sent log via TCP"),
        Err(err) => eprintln!("failed to send TCP log: {err}"),
    }

    client.close();
    println!("TCP connection closed\n");
}

fn demonstrate_batch_sending() {
    println!("=== Batch sending ===");

    let mut client = match Client::unix("/tmp/logflux-agent.sock") {
        Ok(client) => client,
        Err(err) => {
            eprintln!("failed to create client for batch example: {err}");
            return;
        }
    };

    if let Err(err) = client.connect() {
        eprintln!("failed to connect for batch example: {err}");
        return;
    }

    let mut entries = Vec::new();
    for i in 1..=3 {
        let mut entry =
            Entry::new(format!("Batch log entry #{i}")).expect("message is non-empty");
        entry.set_level(Level::Info);
        entry.set_type(EntryType::Log);
        entry.set_source("batch-example");
        entry.add_label("sequence", i.to_string());
        entries.push(entry);
    }

    match client.send_batch(&entries) {
        Ok(()) => println!("sent batch of {} log entries", entries.len()),
        Err(err) => eprintln!("failed to send batch: {err}"),
    }

    client.close();
    println!("batch example completed\n");
}

fn demonstrate_error_handling() {
    println!("=== Error handling ===");

    let mut client = Client::unix("/nonexistent/socket").expect("path is non-empty");
    match client.connect() {
        Err(err) => println!("expected error connecting to a nonexistent socket: {err}"),
        Ok(()) => eprintln!("unexpectedly connected"),
    }

    match client.send_log("This should fail") {
        Err(ClientError::NotConnected) => {
            println!("expected error sending while not connected: {}", ClientError::NotConnected)
        }
        other => eprintln!("unexpected result: {other:?}"),
    }

    match Client::tcp("127.0.0.1", 0) {
        Err(err) => println!("expected error for a zero port: {err}"),
        Ok(_) => eprintln!("unexpectedly created a client with port 0"),
    }

    println!("error handling examples completed\n");
}

fn main() {
    println!("LogFlux Rust SDK - basic example");
    println!("================================\n");

    if agent_running() {
        println!("LogFlux agent is running\n");
    } else {
        println!("warning: LogFlux agent does not appear to be running");
        println!("some examples may fail to connect\n");
    }

    demonstrate_unix_socket();
    demonstrate_tcp_connection();
    demonstrate_batch_sending();
    demonstrate_error_handling();

    println!("all examples completed");
}

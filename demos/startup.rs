use argtable::ArgTable;

fn main() {
    // Parse once at startup, then only read
    let mut args = ArgTable::from_env();

    // -proxy implies -nolisten unless the user said otherwise
    if args.contains("-proxy") {
        args.soft_set_bool_arg("-listen", false);
    }
    let args = args;

    let datadir = args.get_arg("-datadir", "~/.node");
    let port = args.get_int_arg("-port", 8333);
    let listen = args.get_bool_arg("-listen", true);
    let connect = args.get_args("-connect");

    let rpcport = match args.try_get_int_arg("-rpcport") {
        Ok(port) => port.unwrap_or(8332),
        Err(e) => e.exit(),
    };

    println!("Datadir: {}", datadir);
    println!("Port:    {}", port);
    println!("RPC:     {}", rpcport);
    println!("Listen:  {}", listen);
    println!("Connect: {:?}", connect);
    if !args.remaining().is_empty() {
        println!("Command: {}", args.remaining().join(" "));
    }

    println!();
    for (key, value) in args.to_table().iter() {
        println!("{} = {}", key, value);
    }
}

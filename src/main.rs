// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Espalier CLI entrypoint.
//!
//! By default this loads a menu group from a folder of `*.menu.json` files and
//! draws it as a text tree, opening the path to the entry whose resolved
//! location matches `--at`.
//!
//! Use `--list` to enumerate stored menu groups, `--find` to search one
//! group's records, or `--demo` to draw a built-in menu without touching disk.

use std::error::Error;

const DEFAULT_MENU_NAME: &str = "main";
const DEFAULT_LOCATION: &str = "/";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<menus-dir>] [--menu <name>] [--at <location>] [--route <name>=<location>]... [--locations] [--ascii] [--expand-all] [--durable-writes]\n  {program} [--menus <dir>] [--menu <name>] [--at <location>] [--route <name>=<location>]...\n  {program} [<menus-dir>] --list\n  {program} [<menus-dir>] [--menu <name>] --find <needle> [--regex]\n  {program} --demo [--menu <name>] [--at <location>] [--route <name>=<location>]... [--locations] [--ascii] [--expand-all]\n  {program} [<menus-dir>] --save-demo [--durable-writes]\n\nDraws the selected menu group as a text tree. The entry whose resolved\nlocation equals --at is marked active and the path to it is opened.\n\nIf menus-dir/--menus is omitted, the current working directory is used.\n--menu selects the menu group (default `{DEFAULT_MENU_NAME}`); an unknown group draws nothing.\n--route adds a named route the location resolver consults; later routes win.\n--find prints matching records as `id<TAB>title` lines instead of drawing.\n--demo uses a built-in demo menu and routes and cannot be combined with menus-dir/--menus.\n--save-demo writes the demo menu into the folder, then exits.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    menus_dir: Option<String>,
    menu: Option<String>,
    at: Option<String>,
    routes: Vec<(String, String)>,
    show_locations: bool,
    ascii: bool,
    expand_all: bool,
    list: bool,
    find: Option<String>,
    regex: bool,
    save_demo: bool,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--menus" => {
                if options.menus_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.menus_dir = Some(dir);
            }
            "--menu" => {
                if options.menu.is_some() {
                    return Err(());
                }
                let name = args.next().ok_or(())?;
                options.menu = Some(name);
            }
            "--at" => {
                if options.at.is_some() {
                    return Err(());
                }
                let location = args.next().ok_or(())?;
                options.at = Some(location);
            }
            "--route" => {
                let raw = args.next().ok_or(())?;
                let (name, target) = raw.split_once('=').ok_or(())?;
                if name.is_empty() || target.is_empty() {
                    return Err(());
                }
                options.routes.push((name.to_owned(), target.to_owned()));
            }
            "--locations" => {
                if options.show_locations {
                    return Err(());
                }
                options.show_locations = true;
            }
            "--ascii" => {
                if options.ascii {
                    return Err(());
                }
                options.ascii = true;
            }
            "--expand-all" => {
                if options.expand_all {
                    return Err(());
                }
                options.expand_all = true;
            }
            "--list" => {
                if options.list {
                    return Err(());
                }
                options.list = true;
            }
            "--find" => {
                if options.find.is_some() {
                    return Err(());
                }
                let needle = args.next().ok_or(())?;
                options.find = Some(needle);
            }
            "--regex" => {
                if options.regex {
                    return Err(());
                }
                options.regex = true;
            }
            "--save-demo" => {
                if options.save_demo {
                    return Err(());
                }
                options.save_demo = true;
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.menus_dir.is_some() {
                    return Err(());
                }
                options.menus_dir = Some(arg);
            }
        }
    }

    if options.demo && (options.menus_dir.is_some() || options.list || options.save_demo) {
        return Err(());
    }

    if options.regex && options.find.is_none() {
        return Err(());
    }

    if options.list && (options.find.is_some() || options.save_demo) {
        return Err(());
    }

    if options.save_demo && options.find.is_some() {
        return Err(());
    }

    Ok(options)
}

fn menu_folder(menus_dir: Option<&str>, durable_writes: bool) -> espalier::store::MenuFolder {
    let folder = espalier::store::MenuFolder::new(menus_dir.unwrap_or("."));
    if durable_writes {
        folder.with_durability(espalier::store::WriteDurability::Durable)
    } else {
        folder
    }
}

fn demo_menu() -> espalier::model::Menu {
    let id = |value: &str| espalier::model::ItemId::new(value).expect("demo item id");
    espalier::model::Menu::new_with(
        espalier::model::MenuName::new(DEFAULT_MENU_NAME).expect("demo menu name"),
        vec![
            espalier::model::MenuItem::new(id("home"), "Home").with_order(0).with_location("/"),
            espalier::model::MenuItem::new(id("products"), "Products")
                .with_parent(id("home"))
                .with_order(0)
                .with_named_location("products-index"),
            espalier::model::MenuItem::new(id("widgets"), "Widgets")
                .with_parent(id("products"))
                .with_order(0)
                .with_location("/products/widgets"),
            espalier::model::MenuItem::new(id("gadgets"), "Gadgets")
                .with_parent(id("products"))
                .with_order(1)
                .with_location("/products/gadgets"),
            espalier::model::MenuItem::new(id("about"), "About")
                .with_parent(id("home"))
                .with_order(1)
                .with_location("/about"),
            espalier::model::MenuItem::new(id("contact"), "Contact")
                .with_order(1)
                .with_named_location("contact"),
        ],
    )
}

fn demo_routes() -> espalier::resolve::RouteTable {
    espalier::resolve::RouteTable::new()
        .with_route("products-index", "/products")
        .with_route("contact", "/contact")
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "espalier".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.list {
            let folder = menu_folder(options.menus_dir.as_deref(), options.durable_writes);
            for name in folder.list_menus()? {
                println!("{name}");
            }
            return Ok(());
        }

        if options.save_demo {
            let folder = menu_folder(options.menus_dir.as_deref(), options.durable_writes);
            folder.save_menu(&demo_menu())?;
            return Ok(());
        }

        let requested = espalier::model::MenuName::new(
            options.menu.as_deref().unwrap_or(DEFAULT_MENU_NAME),
        )?;
        let menu = if options.demo {
            let demo = demo_menu();
            (demo.name() == &requested).then_some(demo)
        } else {
            let folder = menu_folder(options.menus_dir.as_deref(), options.durable_writes);
            folder.load_menu(&requested)?
        };

        if let Some(needle) = &options.find {
            let mode = if options.regex {
                espalier::query::items::ItemSearchMode::Regex
            } else {
                espalier::query::items::ItemSearchMode::Substring
            };
            if let Some(menu) = &menu {
                for item in espalier::query::items::find_items(menu, needle, mode, true)? {
                    println!("{}\t{}", item.item_id(), item.title());
                }
            }
            return Ok(());
        }

        let mut routes = if options.demo {
            demo_routes()
        } else {
            espalier::resolve::RouteTable::new()
        };
        for (name, target) in options.routes {
            routes.insert_route(name, target);
        }

        let current_location = options.at.as_deref().unwrap_or(DEFAULT_LOCATION);
        let tree = espalier::tree::draw_menu(menu.as_ref(), current_location, |item| {
            routes.resolve_location(item)
        })?;

        let render_options = espalier::render::MenuRenderOptions {
            show_locations: options.show_locations,
            expand_all: options.expand_all,
        };
        let rendered = if options.ascii {
            espalier::render::render_menu_ascii(&tree, &render_options)
        } else {
            espalier::render::render_menu_unicode(&tree, &render_options)
        };
        if !rendered.is_empty() {
            println!("{rendered}");
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("espalier: {err}");
        std::process::exit(1);
    }
}

/// Print the shell command reference.
pub fn handle() {
    println!("Commands:");
    println!("  create field=value, ...                      create a record, id assigned");
    println!("  edit <id> field=value, ...                   overwrite fields of a record");
    println!("  insert (id, field, ...) values ('1', ...)    upsert a record under an id");
    println!("  find <firstname|lastname|dateofbirth> <val>  indexed lookup");
    println!("  select [field, ...] [where cond]             query; and/or conditions, 'quoted' values");
    println!("  update set field='v', ... where cond         overwrite fields on matching records");
    println!("  delete where cond                            delete matching records");
    println!("  remove <id>                                  remove one record by id");
    println!("  list                                         list all records");
    println!("  stat                                         record counts");
    println!("  purge                                        reclaim space after deletes");
    println!("  export <csv|xml> <path>                      write all records to a file");
    println!("  import <csv|xml> <path>                      merge records from a file");
    println!("  help                                         this reference");
    println!("  exit                                         quit");
}

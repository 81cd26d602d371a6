use basic_collections::collections::adapters::{Queue, Stack};
use basic_collections::collections::binary_tree::{BinarySearchTree, Order};
use basic_collections::collections::contiguous::DynamicArray;
use basic_collections::collections::hash::HashMap;
use basic_collections::collections::linked::LinkedList;

fn main() {
    println!("\n[DynamicArray]\n");

    let mut arr = DynamicArray::new();
    for value in [1.0, 2.0, 3.0] {
        arr.push_back(value);
    }
    arr.print();
    println!(
        "len = {}, cap = {}, front = {}, back = {}",
        arr.len(),
        arr.cap(),
        arr.front(),
        arr.back()
    );

    arr.insert(1, 1.5);
    arr.erase(0);
    arr.resize(6, 9.0);
    arr.print();
    println!("{:?}", arr.try_get(10));

    println!("\n[LinkedList]\n");

    let mut list: LinkedList = [2.0, 3.0].into_iter().collect();
    list.push_front(1.0);
    list.push_back(4.0);
    list.insert(2, 2.5);
    list.print();
    println!("find(3) = {:?}, find(7) = {:?}", list.find(3.0), list.find(7.0));
    list.pop_back();
    list.erase(0);
    list.print();

    println!("\n[Stack]\n");

    let mut stack = Stack::new();
    for value in [1.0, 2.0, 3.0] {
        stack.push(value);
    }
    stack.print();
    stack.pop();
    println!("top = {}", stack.top());

    println!("\n[Queue]\n");

    let mut queue = Queue::new();
    for value in [1.0, 2.0, 3.0] {
        queue.enqueue(value);
    }
    queue.print();
    queue.dequeue();
    println!("front = {}, back = {}", queue.front(), queue.back());

    println!("\n[HashMap]\n");

    let mut map = HashMap::new();
    map.insert(10, 100);
    map.insert(20, 200);
    map.insert(-5, 50);
    map.insert(10, 111);
    map.print();
    println!("get(10) = {:?}, get(30) = {:?}", map.get(10), map.get(30));
    map.remove(20);
    println!("len = {}, load factor = {:.3}", map.len(), map.load_factor());

    println!("\n[BinarySearchTree]\n");

    let mut tree: BinarySearchTree = [5.0, 3.0, 7.0, 2.0, 4.0, 6.0, 8.0].into_iter().collect();
    print!("In order:    ");
    tree.print_inorder();
    print!("Pre order:   ");
    tree.print_preorder();
    print!("Post order:  ");
    tree.print_postorder();
    print!("Level order: ");
    tree.print_levelorder();
    println!(
        "len = {}, min = {}, max = {}, height = {}, valid = {}",
        tree.len(),
        tree.min(),
        tree.max(),
        tree.height(),
        tree.is_valid_bst()
    );

    tree.erase(5.0);
    println!("After erasing 5: {}", tree.traversal(Order::Level));
    println!("{tree:?}");
}
